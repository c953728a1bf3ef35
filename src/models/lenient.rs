//! # 관대한(lenient) 필드 역직렬화
//!
//! 기존 클라이언트는 숫자를 문자열로 보내기도 합니다 (`"Priority": "1"`,
//! `"user_id": "00001"`). 요청 본문 구조체는 `#[serde(deserialize_with = "...")]`로
//! 이 모듈의 함수를 지정해, 타입 변환이 가능한 값은 받아들이고
//! 변환할 수 없는 값만 에러(→ 422)로 돌려보냅니다.
//!
//! - 정수: JSON 정수, 또는 앞뒤 공백을 뺀 정수 문자열 (`"01"` → 1)
//! - 불리언: `true`/`false`, `0`/`1`, `"true"`/`"false"`/`"1"`/`"0"`/`"yes"`/`"no"`/`"on"`/`"off"`
//! - 날짜/시간: `2024-01-01T00:00:00`, `2024-01-01 00:00:00`, `2024-01-01`,
//!   또는 오프셋이 붙은 RFC 3339 (`...Z`, `...+09:00`) → UTC 기준 naive 값

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// 없거나 `null`이면 `None`, 그 외에는 정수로 변환합니다.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => to_i64(&value).map(Some).map_err(D::Error::custom),
    }
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom(format!("expected a boolean, got {}", value))),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(D::Error::custom(format!("expected a boolean, got {}", value))),
        },
        _ => Err(D::Error::custom(format!("expected a boolean, got {}", value))),
    }
}

pub fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => parse_datetime(&s).map(Some).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected a datetime string, got {}",
            other
        ))),
    }
}

fn to_i64(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("expected an integer, got {}", n)),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| format!("expected an integer, got {:?}", s)),
        other => Err(format!("expected an integer, got {}", other)),
    }
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    if let Some(dt) = s
        .parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }
    Err(format!("expected an ISO-8601 datetime, got {:?}", s))
}
