//! Cliente HTTP do collector.
//!
//! Qualquer resposta HTTP (inclusive 4xx/5xx) é devolvida como status;
//! apenas falhas de transporte (conexão recusada, DNS, timeout) viram erro.

use std::time::Duration;
use tracing::{debug, warn};
use vitals_core::protocol::{
    DATA_PATH, ProtocolError, REGISTER_PATH, encode_reading, encode_register, endpoint_url,
};
use vitals_core::{RegisterRequest, SensorReading, SimulatorConfig};

/// Falhas ao falar com o collector.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    /// Conexão recusada, DNS, timeout.
    #[error("Falha de transporte em {url}: {message}")]
    Transport { url: String, message: String },

    #[error(transparent)]
    Encode(#[from] ProtocolError),
}

/// Destino das chamadas de registro e de envio de leituras.
pub trait Collector {
    /// `POST /register`. Retorna o status HTTP.
    fn register(&self, request: &RegisterRequest) -> Result<u16, CollectorError>;

    /// `POST /data`. Retorna o status HTTP.
    fn send_reading(&self, reading: &SensorReading) -> Result<u16, CollectorError>;
}

/// Collector remoto acessado via HTTP bloqueante (ureq).
pub struct HttpCollector {
    agent: ureq::Agent,
    register_url: String,
    data_url: String,
}

impl HttpCollector {
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            register_url: endpoint_url(api_url, REGISTER_PATH),
            data_url: endpoint_url(api_url, DATA_PATH),
        }
    }

    pub fn from_config(config: &SimulatorConfig) -> Self {
        Self::new(&config.api_url, request_timeout(config.timeout_secs))
    }

    fn post_json(&self, url: &str, body: &[u8]) -> Result<u16, CollectorError> {
        let result = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_bytes(body);
        match result {
            Ok(resp) => Ok(resp.status()),
            Err(ureq::Error::Status(code, _)) => {
                debug!("{url} respondeu {code}");
                Ok(code)
            }
            Err(ureq::Error::Transport(t)) => Err(CollectorError::Transport {
                url: url.to_string(),
                message: t.to_string(),
            }),
        }
    }
}

impl Collector for HttpCollector {
    fn register(&self, request: &RegisterRequest) -> Result<u16, CollectorError> {
        let body = encode_register(request)?;
        self.post_json(&self.register_url, &body)
    }

    fn send_reading(&self, reading: &SensorReading) -> Result<u16, CollectorError> {
        let body = encode_reading(reading)?;
        self.post_json(&self.data_url, &body)
    }
}

/// Timeout das requisições. `0` ou valor fora do alcance de [`Duration`]
/// resultam no padrão do cliente.
fn request_timeout(secs: f64) -> Option<Duration> {
    if secs <= 0.0 {
        return None;
    }
    match Duration::try_from_secs_f64(secs) {
        Ok(timeout) => Some(timeout),
        Err(e) => {
            warn!("timeout_secs inválido ({secs}): {e}. Usando padrão do cliente.");
            None
        }
    }
}
