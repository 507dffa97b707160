use std::collections::HashSet;

use crate::error::{AppError, AppResult};
use crate::models::{Feedback, LotteryConfig, LotteryRecord, Prize};

/// 校验单个奖品: code / name 非空，概率为有限非负数
pub fn validate_prize(prize: &Prize) -> AppResult<()> {
    if prize.code.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Prize code must not be empty".to_string(),
        ));
    }
    if prize.name.trim().is_empty() {
        return Err(AppError::ValidationError(format!(
            "Prize {} must have a name",
            prize.code
        )));
    }
    if !prize.probability.is_finite() || prize.probability < 0.0 {
        return Err(AppError::ValidationError(format!(
            "Prize {} has invalid probability {}",
            prize.code, prize.probability
        )));
    }
    Ok(())
}

/// 校验奖品列表，code 在列表内必须唯一
pub fn validate_prizes(prizes: &[Prize]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(prizes.len());
    for prize in prizes {
        validate_prize(prize)?;
        if !seen.insert(prize.code.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Duplicate prize code: {}",
                prize.code
            )));
        }
    }
    Ok(())
}

pub fn validate_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Config title must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_config(config: &LotteryConfig) -> AppResult<()> {
    if config.id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Config id must not be empty".to_string(),
        ));
    }
    validate_title(&config.title)?;
    validate_prizes(&config.prizes)
}

pub fn validate_record(record: &LotteryRecord) -> AppResult<()> {
    if record.id.trim().is_empty() || record.config_id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Record id and config id must not be empty".to_string(),
        ));
    }
    validate_prize(&record.prize)
}

/// 校验反馈内容（按字符计算长度）
pub fn validate_feedback_content(content: &str, max_len: usize) -> AppResult<()> {
    if content.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Feedback content must not be empty".to_string(),
        ));
    }
    if content.chars().count() > max_len {
        return Err(AppError::ValidationError(format!(
            "Feedback content exceeds {max_len} characters"
        )));
    }
    Ok(())
}

/// 反馈 id 在集合内必须唯一
pub fn validate_feedback_ids(entries: &[Feedback]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(AppError::Conflict(format!(
                "Duplicate feedback id: {}",
                entry.id
            )));
        }
    }
    Ok(())
}

/// 文件名只能是目录内的单个文件，不允许路径
pub fn validate_file_name(name: &str) -> AppResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || trimmed.contains('\0')
    {
        return Err(AppError::ValidationError(format!(
            "Invalid file name: {name:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prize() {
        assert!(validate_prize(&Prize::new("P1", "Gift Card", 0.2)).is_ok());
        assert!(validate_prize(&Prize::new("P1", "Gift Card", 0.0)).is_ok());
        assert!(validate_prize(&Prize::new("", "Gift Card", 0.2)).is_err());
        assert!(validate_prize(&Prize::new("P1", "  ", 0.2)).is_err());
        assert!(validate_prize(&Prize::new("P1", "Gift Card", -0.1)).is_err());
        assert!(validate_prize(&Prize::new("P1", "Gift Card", f64::INFINITY)).is_err());
        assert!(validate_prize(&Prize::new("P1", "Gift Card", f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_prizes_rejects_duplicate_codes() {
        let prizes = vec![
            Prize::new("P1", "Gift Card", 0.2),
            Prize::new("P2", "Mug", 0.8),
            Prize::new("P1", "Pen", 0.1),
        ];
        match validate_prizes(&prizes) {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("P1")),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(validate_prizes(&prizes[..2]).is_ok());
        assert!(validate_prizes(&[]).is_ok());
    }

    #[test]
    fn test_validate_config() {
        let config = LotteryConfig::new("c1", "Spring Draw", vec![Prize::new("P1", "Mug", 1.0)]);
        assert!(validate_config(&config).is_ok());

        let untitled = LotteryConfig::new("c1", " ", vec![]);
        assert!(validate_config(&untitled).is_err());

        let no_id = LotteryConfig::new("", "Spring Draw", vec![]);
        assert!(validate_config(&no_id).is_err());
    }

    #[test]
    fn test_validate_feedback_content() {
        assert!(validate_feedback_content("Nice wheel", 10).is_ok());
        assert!(validate_feedback_content("   ", 10).is_err());
        assert!(validate_feedback_content("抽奖很好玩", 5).is_ok());
        assert!(validate_feedback_content("抽奖很好玩!", 5).is_err());
    }

    #[test]
    fn test_validate_feedback_ids() {
        let entries = vec![Feedback::new(1, "a"), Feedback::new(2, "b")];
        assert!(validate_feedback_ids(&entries).is_ok());

        let duplicated = vec![Feedback::new(1, "a"), Feedback::new(1, "b")];
        assert!(matches!(
            validate_feedback_ids(&duplicated),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("lottery-export.json").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("../secrets.json").is_err());
        assert!(validate_file_name("dir\\file.json").is_err());
    }
}
