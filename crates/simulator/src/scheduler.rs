//! Agendamento dos envios.
//!
//! O loop principal não dorme diretamente: pede ao [`Ticker`] para esperar
//! o próximo ciclo. Em produção é um [`IntervalTicker`]; nos testes, um
//! ticker que avança sem relógio.
//!
//! A pausa é sempre o intervalo completo após cada envio, sem descontar o
//! tempo gasto na requisição.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Granularidade da checagem de cancelamento durante a espera.
const STOP_POLL: Duration = Duration::from_millis(50);

/// Decide quando o próximo ciclo começa.
pub trait Ticker {
    /// Bloqueia até o próximo ciclo. `false` encerra o loop.
    fn wait(&mut self) -> bool;
}

/// Sinal de parada compartilhável entre threads.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Ticker de relógio: cada espera dura o intervalo inteiro.
pub struct IntervalTicker {
    interval: Duration,
    stop: StopHandle,
}

impl IntervalTicker {
    pub fn new(interval: Duration, stop: StopHandle) -> Self {
        Self { interval, stop }
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self) -> bool {
        let deadline = Instant::now() + self.interval;
        loop {
            if self.stop.is_stopped() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep((deadline - now).min(STOP_POLL));
        }
        !self.stop.is_stopped()
    }
}
