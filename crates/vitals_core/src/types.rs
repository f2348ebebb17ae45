//! Definição dos tipos trafegados entre o simulador e o collector.
//!
//! Os nomes dos campos seguem exatamente o JSON esperado pelo backend
//! (`hr`, `spo2`, `temp`, `hum`, `_recv_time`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Formato do timestamp `_recv_time` (hora local, resolução de segundos).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ──────────────────────────────────────────────
// Leitura
// ──────────────────────────────────────────────

/// Uma leitura sintética de sinais vitais.
///
/// Construída imediatamente antes de cada envio e descartada em seguida.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    /// Identificador do dispositivo (constante durante o processo)
    pub device_id: String,
    /// Frequência cardíaca (bpm)
    pub hr: f64,
    /// Saturação de oxigênio (%)
    pub spo2: f64,
    /// Temperatura corporal (°C)
    pub temp: f64,
    /// Umidade relativa (%)
    pub hum: f64,
    /// Momento local da geração, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "_recv_time")]
    pub recv_time: String,
}

impl SensorReading {
    /// Interpreta `_recv_time` de volta para um [`NaiveDateTime`].
    pub fn recv_time_parsed(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.recv_time, TIMESTAMP_FORMAT).ok()
    }
}

// ──────────────────────────────────────────────
// Registro
// ──────────────────────────────────────────────

/// Corpo do `POST /register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub device_id: String,
}

impl RegisterRequest {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
