//! 字符串校验工具
//!
//! 纯函数，不会 panic：缺失或格式错误的输入一律判定为 `false`。

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("邮箱正则无效")
});

/// 密码最小长度（按字符计）
pub const MIN_PASSWORD_LEN: usize = 8;

/// 校验邮箱格式
///
/// 在正则之外还要求域名部分不以 `.` 开头、不含连续的 `.`。
///
/// ```
/// use product_catalog::validators::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("username@domain..com"));
/// assert!(!is_valid_email(None::<&str>));
/// ```
pub fn is_valid_email<'a>(email: impl Into<Option<&'a str>>) -> bool {
    let Some(email) = email.into() else {
        return false;
    };

    if !EMAIL_PATTERN.is_match(email) {
        return false;
    }

    match email.split_once('@') {
        Some((_, domain)) => !domain.starts_with('.') && !domain.contains(".."),
        None => false,
    }
}

/// 校验密码强度
///
/// 需同时满足：至少 8 个字符、包含大写字母、小写字母、数字以及符号（非字母数字字符或下划线）。
pub fn is_strong_password<'a>(password: impl Into<Option<&'a str>>) -> bool {
    let Some(password) = password.into() else {
        return false;
    };

    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c == '_' || !c.is_alphanumeric())
}
