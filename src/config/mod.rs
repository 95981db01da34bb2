use serde::Deserialize;
use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::Seat;

const ENV_PREFIX: &str = "CINEMA";
const DEFAULT_CONFIG_FILE: &str = "cinema.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    pub app: AppConfig,
    #[validate(nested)]
    pub room: RoomConfig,
    #[validate(nested)]
    pub seats: SeatRangesConfig,
    #[validate(nested)]
    pub price: PriceRangeConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
    /// `fmt` or `json`
    pub log_format: String,
}

// Размеры зала и места, проданные до старта
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoomConfig {
    #[validate(range(min = 1))]
    pub total_rows: i32,
    #[validate(range(min = 1))]
    pub total_columns: i32,
    #[serde(default)]
    pub sold_seats: Vec<Seat>,
}

/// Допустимые номера рядов и мест: `min < n <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
#[validate(schema(function = "validate_seat_range"))]
pub struct SeatRangeConfig {
    pub min: i32,
    pub max: i32,
}

impl SeatRangeConfig {
    pub fn contains(&self, value: i32) -> bool {
        self.min < value && value <= self.max
    }
}

fn validate_seat_range(range: &SeatRangeConfig) -> Result<(), ValidationError> {
    if range.min >= range.max {
        return Err(ValidationError::new("empty_seat_range")
            .with_message(format!("min ({}) must be less than max ({})", range.min, range.max).into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct SeatRangesConfig {
    #[validate(nested)]
    pub row: SeatRangeConfig,
    #[validate(nested)]
    pub column: SeatRangeConfig,
}

// Ценовая политика: ряды до border_row включительно стоят first_price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
pub struct PriceRangeConfig {
    pub border_row: i32,
    #[validate(range(min = 0))]
    pub first_price: i64,
    #[validate(range(min = 0))]
    pub second_price: i64,
}

impl PriceRangeConfig {
    pub fn price_for(&self, seat: &Seat) -> i64 {
        if seat.row <= self.border_row {
            self.first_price
        } else {
            self.second_price
        }
    }
}

impl Config {
    /// Loads defaults, then `CINEMA_CONFIG` (or `cinema.toml`) if present, then
    /// `CINEMA__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("CINEMA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let builder = Self::defaults()?
            .add_source(::config::File::with_name(&path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder)
    }

    /// Parses a TOML document layered over the defaults. Used by tests and tools.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(::config::File::from_str(source, ::config::FileFormat::Toml));
        Self::build(builder)
    }

    fn build(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ConfigError> {
        Ok(::config::Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000)?
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "cinema_room=debug,tower_http=debug")?
            .set_default("app.log_format", "fmt")?
            .set_default("room.total_rows", 9)?
            .set_default("room.total_columns", 9)?
            .set_default("seats.row.min", 0)?
            .set_default("seats.row.max", 9)?
            .set_default("seats.column.min", 0)?
            .set_default("seats.column.max", 9)?
            .set_default("price.border_row", 4)?
            .set_default("price.first_price", 10)?
            .set_default("price.second_price", 8)?)
    }
}
