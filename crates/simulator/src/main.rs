//! # Vitals Simulator
//!
//! Simula um dispositivo IoT de sinais vitais: registra o dispositivo no
//! collector e envia uma leitura sintética (FC, SpO2, temperatura, umidade)
//! via HTTP POST a cada intervalo, até ser encerrado.
//!
//! ## Uso
//! ```bash
//! vitals_simulator                          # config.toml ao lado do executável
//! vitals_simulator --config ./sim.toml      # config alternativo
//! vitals_simulator --iterations 10          # encerra após 10 envios
//! vitals_simulator --write-config           # grava o config efetivo e sai
//! ```

mod client;
mod runner;
mod scheduler;

#[cfg(test)]
mod mock_collector;

use client::HttpCollector;
use runner::Simulator;
use scheduler::{IntervalTicker, StopHandle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, warn};
use vitals_core::{AppConfig, ReadingGenerator};

fn main() {
    // ── Logging ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Argumentos ──
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = arg_value(&args, "--config")
        .map(PathBuf::from)
        .unwrap_or_else(AppConfig::default_path);

    // ── Carregar config ──
    let mut config = AppConfig::load(&config_path);

    if let Some(raw) = arg_value(&args, "--iterations") {
        match raw.parse::<u64>() {
            Ok(n) => config.simulator.max_iterations = n,
            Err(e) => warn!("--iterations inválido ({raw}): {e}. Ignorando."),
        }
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("Config inválida: {e}");
        }
        std::process::exit(2);
    }

    // Só grava arquivo quando pedido explicitamente
    if has_flag(&args, "--write-config") {
        if let Err(e) = config.save(&config_path) {
            error!("Não foi possível salvar config: {e}");
            std::process::exit(1);
        }
        return;
    }

    let sim_cfg = &config.simulator;

    // ── Banner ──
    println!();
    println!("══════════════════════════════════════════════");
    println!("   ♥ VITALS SIMULATOR – ATIVO");
    println!("══════════════════════════════════════════════");
    println!("  Dispositivo: {}", sim_cfg.device_id);
    println!("  Collector:   {}", sim_cfg.api_url);
    println!("  Intervalo:   {:.1}s", sim_cfg.interval_secs);
    match sim_cfg.iteration_limit() {
        Some(n) => println!("  Envios:      {n}"),
        None => println!("  Envios:      ∞ (Ctrl+C para sair)"),
    }
    println!("══════════════════════════════════════════════");
    println!();

    // ── Loop principal ──
    let collector = HttpCollector::from_config(sim_cfg);
    let generator = ReadingGenerator::new(sim_cfg.device_id.clone());
    let mut simulator =
        Simulator::new(generator, collector).with_max_iterations(sim_cfg.iteration_limit());

    let mut ticker = IntervalTicker::new(
        Duration::from_secs_f64(sim_cfg.interval_secs),
        StopHandle::new(),
    );
    simulator.run(&mut ticker);
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Valor do argumento `--flag <valor>` ou `--flag=<valor>`.
fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter().enumerate().find_map(|(i, a)| {
        if a == flag {
            args.get(i + 1).map(String::as_str)
        } else {
            a.strip_prefix(flag)
                .and_then(|rest| rest.strip_prefix('='))
        }
    })
}
