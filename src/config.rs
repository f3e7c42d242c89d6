//! Runtime configuration: environment first, then command-line flags.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `BLOCKFALL_TICK_MS` | `--tick-ms N` | 500 |
//! | `BLOCKFALL_SEED` | `--seed N` | time-derived |
//! | `BLOCKFALL_LOG_PATH` | `--log PATH` | none |

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_ms: u64,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// Missing, empty or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(TICK_MS);

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick_ms,
            seed,
            log_path,
        }
    }

    /// Override fields from command-line flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--tick-ms" | "--seed" | "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    match flag {
                        "--tick-ms" => {
                            let ms: u64 = v
                                .parse()
                                .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                            if ms == 0 {
                                bail!("--tick-ms must be positive");
                            }
                            self.tick_ms = ms;
                        }
                        "--seed" => {
                            self.seed = Some(
                                v.parse()
                                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                            );
                        }
                        _ => self.log_path = Some(v.clone()),
                    }
                }
                other => bail!("unknown argument: {}", other),
            }
            i += 1;
        }
        Ok(())
    }

    /// The configured seed, or one derived from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn environment_values_are_parsed() {
        let cfg = GameConfig::from_lookup(|key| match key {
            "BLOCKFALL_TICK_MS" => Some(" 250 ".to_string()),
            "BLOCKFALL_SEED" => Some("42".to_string()),
            "BLOCKFALL_LOG_PATH" => Some("/tmp/blockfall.jsonl".to_string()),
            _ => None,
        });
        assert_eq!(cfg.tick_ms, 250);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/blockfall.jsonl"));
    }

    #[test]
    fn bad_environment_values_fall_back() {
        let cfg = GameConfig::from_lookup(|key| match key {
            "BLOCKFALL_TICK_MS" => Some("0".to_string()),
            "BLOCKFALL_SEED" => Some("abc".to_string()),
            "BLOCKFALL_LOG_PATH" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn args_override_fields() {
        let mut cfg = GameConfig::default();
        cfg.apply_args(&args(&["--seed", "7", "--tick-ms", "100", "--log", "out.jsonl"]))
            .unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.tick_ms, 100);
        assert_eq!(cfg.log_path.as_deref(), Some("out.jsonl"));
    }

    #[test]
    fn bad_args_are_errors() {
        let mut cfg = GameConfig::default();
        assert!(cfg.apply_args(&args(&["--seed"])).is_err());
        assert!(cfg.apply_args(&args(&["--tick-ms", "0"])).is_err());
        assert!(cfg.apply_args(&args(&["--tick-ms", "fast"])).is_err());
        assert!(cfg.apply_args(&args(&["--pause"])).is_err());
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn explicit_seed_is_used() {
        let cfg = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        assert_eq!(cfg.resolve_seed(), 99);
    }
}
