//! AI 难度与配置

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AiError, Result};

/// 简单难度下直接随机走子的概率
pub const EASY_RANDOM_MOVE_CHANCE: f64 = 0.3;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单：depth=1, 30% 概率随机走子
    Easy,
    /// 中等：depth=2
    Medium,
    /// 困难：depth=3
    Hard,
    /// 专家：depth=4
    Expert,
}

impl Difficulty {
    /// 所有难度（由易到难）
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// 搜索深度（半回合）
    pub fn depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AiError::UnknownDifficulty(s.to_string()))
    }
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
    pub random_move_chance: f64,
}

/// 配置文件格式：只有 difficulty 必填，其余字段覆盖难度默认值
#[derive(Debug, Deserialize)]
struct AiConfigFile {
    difficulty: Difficulty,
    max_depth: Option<u8>,
    random_move_chance: Option<f64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let random_move_chance = match difficulty {
            Difficulty::Easy => EASY_RANDOM_MOVE_CHANCE,
            _ => 0.0,
        };
        Self {
            difficulty,
            max_depth: difficulty.depth(),
            random_move_chance,
        }
    }

    /// 从 JSON 解析配置
    pub fn from_json(json: &str) -> Result<Self> {
        let file: AiConfigFile = serde_json::from_str(json)?;
        let mut config = Self::from_difficulty(file.difficulty);
        if let Some(depth) = file.max_depth {
            config.max_depth = depth;
        }
        if let Some(chance) = file.random_move_chance {
            config.random_move_chance = chance;
        }
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 检查配置值
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(AiError::InvalidConfig {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.random_move_chance) {
            return Err(AiError::InvalidConfig {
                reason: format!(
                    "random_move_chance must be within [0, 1], got {}",
                    self.random_move_chance
                ),
            });
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}
