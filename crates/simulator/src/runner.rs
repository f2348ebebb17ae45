//! Loop do simulador: registra uma vez e envia leituras a cada ciclo.
//!
//! As operações de rede devolvem `Result`; quem decide logar e seguir em
//! frente é o [`Simulator::run`]. Nenhuma falha interrompe o loop.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{error, info, warn};
use vitals_core::{ReadingGenerator, RegisterRequest, SensorReading};

use crate::client::{Collector, CollectorError};
use crate::scheduler::Ticker;

/// Resultado de um envio que chegou ao collector.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub reading: SensorReading,
    pub status: u16,
}

impl Delivery {
    pub fn accepted(&self) -> bool {
        is_success(self.status)
    }
}

/// Contadores de uma execução.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Registro respondido com 2xx
    pub registered: bool,
    /// Envios respondidos com 2xx
    pub sent: u64,
    /// Envios respondidos com status não-2xx
    pub rejected: u64,
    /// Envios com falha de transporte
    pub failed: u64,
}

impl RunStats {
    pub fn attempts(&self) -> u64 {
        self.sent + self.rejected + self.failed
    }
}

pub struct Simulator<C, R = StdRng> {
    generator: ReadingGenerator<R>,
    collector: C,
    max_iterations: Option<u64>,
}

impl<C: Collector, R: Rng> Simulator<C, R> {
    pub fn new(generator: ReadingGenerator<R>, collector: C) -> Self {
        Self {
            generator,
            collector,
            max_iterations: None,
        }
    }

    /// Encerra o loop após `limit` envios.
    pub fn with_max_iterations(mut self, limit: Option<u64>) -> Self {
        self.max_iterations = limit;
        self
    }

    pub fn collector(&self) -> &C {
        &self.collector
    }

    /// Informa ao collector que o dispositivo existe.
    pub fn register_device(&self) -> Result<u16, CollectorError> {
        self.collector
            .register(&RegisterRequest::new(self.generator.device_id()))
    }

    /// Gera uma leitura e a envia ao collector.
    pub fn send_data(&mut self) -> Result<Delivery, CollectorError> {
        let reading = self.generator.generate();
        let status = self.collector.send_reading(&reading)?;
        Ok(Delivery { reading, status })
    }

    /// Registra uma vez e envia até o ticker parar ou o limite ser atingido.
    pub fn run<T: Ticker>(&mut self, ticker: &mut T) -> RunStats {
        let mut stats = RunStats::default();

        info!(
            "Iniciando gerador de dados de teste (dispositivo {})",
            self.generator.device_id()
        );

        match self.register_device() {
            Ok(status) if is_success(status) => {
                info!("Registro do dispositivo: {status}");
                stats.registered = true;
            }
            Ok(status) => warn!("Registro do dispositivo: {status}"),
            Err(e) => error!("Erro no registro: {e}"),
        }

        loop {
            match self.send_data() {
                Ok(delivery) => {
                    let payload = serde_json::to_string(&delivery.reading).unwrap_or_default();
                    info!("Dados enviados: {payload}");
                    if delivery.accepted() {
                        info!("Resposta: {}", delivery.status);
                        stats.sent += 1;
                    } else {
                        warn!("Resposta: {}", delivery.status);
                        stats.rejected += 1;
                    }
                }
                Err(e) => {
                    error!("Erro ao enviar dados: {e}");
                    stats.failed += 1;
                }
            }

            if self.max_iterations.is_some_and(|limit| stats.attempts() >= limit) {
                break;
            }
            if !ticker.wait() {
                break;
            }
        }

        info!(
            "Encerrado: {} enviados, {} rejeitados, {} falhas",
            stats.sent, stats.rejected, stats.failed
        );
        stats
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
