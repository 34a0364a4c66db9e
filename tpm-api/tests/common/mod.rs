//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::time::Duration;

use tpm_api::{HttpAccountApi, Payload};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// A payload shaped like the one the sign-up screen sends.
pub fn student_payload() -> Payload {
    [
        ("key", "2051052001"),
        ("email", "2051052001@ou.edu.vn"),
        ("password", " p@ss word "),
    ]
    .into_iter()
    .collect()
}

/// Client pointed at a mock server.
pub fn client_for(base_url: &str) -> HttpAccountApi {
    HttpAccountApi::new(base_url, Some(Duration::from_secs(5)))
        .unwrap_or_else(|e| panic!("failed to build client for {base_url}: {e}"))
}
