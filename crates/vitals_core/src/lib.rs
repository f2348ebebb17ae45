//! # Vitals Core
//!
//! Crate compartilhada com o modelo de leitura, o gerador de sinais
//! vitais sintéticos, o protocolo JSON e a configuração TOML do
//! simulador de dispositivo.
//!
//! ## Módulos
//! - [`types`] – Leitura (`SensorReading`) e corpo de registro
//! - [`generator`] – Sorteio uniforme dos sinais dentro dos intervalos normais
//! - [`protocol`] – Rotas e encode/decode JSON
//! - [`config`] – Configuração via TOML

pub mod types;
pub mod generator;
pub mod protocol;
pub mod config;

// Re-exports convenientes
pub use types::{RegisterRequest, SensorReading, TIMESTAMP_FORMAT};
pub use generator::{ReadingGenerator, ReadingRanges, VitalRange};
pub use protocol::{DATA_PATH, REGISTER_PATH, endpoint_url};
pub use config::{AppConfig, ConfigError, SimulatorConfig};
