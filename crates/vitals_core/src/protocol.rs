//! Protocolo HTTP/JSON com o collector.
//!
//! ```text
//! POST <api_url>/register   {"device_id": "..."}
//! POST <api_url>/data       {"device_id", "hr", "spo2", "temp", "hum", "_recv_time"}
//! ```
//!
//! O corpo das respostas não é interpretado, apenas o status HTTP.

use crate::types::{RegisterRequest, SensorReading};

/// Rota de registro do dispositivo.
pub const REGISTER_PATH: &str = "/register";

/// Rota de envio de leituras.
pub const DATA_PATH: &str = "/data";

/// Erros do protocolo.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Erro de serialização: {0}")]
    Serialize(String),

    #[error("Erro de deserialização: {0}")]
    Deserialize(String),
}

/// Monta a URL completa de um endpoint, tolerando `/` no final da base.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Codifica uma leitura como corpo JSON do `POST /data`.
pub fn encode_reading(reading: &SensorReading) -> Result<Vec<u8>, ProtocolError> {
    serde_json::to_vec(reading).map_err(|e| ProtocolError::Serialize(e.to_string()))
}

/// Decodifica o corpo de um `POST /data`.
pub fn decode_reading(data: &[u8]) -> Result<SensorReading, ProtocolError> {
    serde_json::from_slice(data).map_err(|e| ProtocolError::Deserialize(e.to_string()))
}

/// Codifica o corpo do `POST /register`.
pub fn encode_register(request: &RegisterRequest) -> Result<Vec<u8>, ProtocolError> {
    serde_json::to_vec(request).map_err(|e| ProtocolError::Serialize(e.to_string()))
}

/// Decodifica o corpo de um `POST /register`.
pub fn decode_register(data: &[u8]) -> Result<RegisterRequest, ProtocolError> {
    serde_json::from_slice(data).map_err(|e| ProtocolError::Deserialize(e.to_string()))
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
