//! Configuração do simulador via TOML.
//!
//! Os valores padrão reproduzem o comportamento fixo do script de teste:
//! dispositivo `ESP32_TEST_01`, collector em `http://localhost:5000`,
//! um envio por segundo, sem timeout e sem fim.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Erros ao persistir a configuração.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Erro de E/S em {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro ao serializar TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuração do simulador de dispositivo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Identificador do dispositivo simulado
    pub device_id: String,
    /// URL base do collector
    pub api_url: String,
    /// Intervalo entre envios (segundos)
    pub interval_secs: f64,
    /// Timeout das requisições HTTP (segundos, 0 = padrão do cliente, máx. 3600)
    pub timeout_secs: f64,
    /// Número máximo de envios (0 = infinito)
    pub max_iterations: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            device_id: "ESP32_TEST_01".into(),
            api_url: "http://localhost:5000".into(),
            interval_secs: 1.0,
            timeout_secs: 0.0,
            max_iterations: 0,
        }
    }
}

impl SimulatorConfig {
    /// Limite de iterações, se houver.
    pub fn iteration_limit(&self) -> Option<u64> {
        (self.max_iterations > 0).then_some(self.max_iterations)
    }
}

/// Configuração raiz do aplicativo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulator: SimulatorConfig,
}

impl AppConfig {
    /// Carrega configuração de um arquivo TOML.
    ///
    /// Arquivo ausente ou inválido resulta na configuração padrão.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        info!("Configuração carregada de {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Erro ao parsear {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Erro ao ler {}: {}", path.display(), e);
                }
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do config.toml (ao lado do executável).
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let sim = &self.simulator;

        if sim.device_id.trim().is_empty() {
            errors.push("device_id não pode ser vazio".into());
        }
        if !(sim.api_url.starts_with("http://") || sim.api_url.starts_with("https://")) {
            errors.push(format!(
                "api_url deve começar com http:// ou https://: {:?}",
                sim.api_url
            ));
        }
        if !(sim.interval_secs > 0.0 && sim.interval_secs <= 3600.0) {
            errors.push(format!(
                "Intervalo inválido: {} (0–3600, exclusivo em 0)",
                sim.interval_secs
            ));
        }
        if !(sim.timeout_secs >= 0.0 && sim.timeout_secs <= 3600.0) {
            errors.push(format!("Timeout inválido: {}", sim.timeout_secs));
        }

        errors
    }
}
