//! Gerador de leituras sintéticas.
//!
//! Cada campo é sorteado de forma uniforme e independente dentro de um
//! intervalo semiaberto `[min, max)` considerado fisiologicamente normal.

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{SensorReading, TIMESTAMP_FORMAT};

/// Intervalo semiaberto `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalRange {
    pub min: f64,
    pub max: f64,
}

impl VitalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Sorteia um valor uniforme no intervalo.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Intervalos de amostragem de cada sinal vital.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingRanges {
    /// Frequência cardíaca (bpm)
    pub hr: VitalRange,
    /// SpO2 (%)
    pub spo2: VitalRange,
    /// Temperatura corporal (°C)
    pub temp: VitalRange,
    /// Umidade (%)
    pub hum: VitalRange,
}

impl ReadingRanges {
    pub const HR: VitalRange = VitalRange::new(60.0, 100.0);
    pub const SPO2: VitalRange = VitalRange::new(95.0, 100.0);
    pub const TEMP: VitalRange = VitalRange::new(36.1, 37.2);
    pub const HUM: VitalRange = VitalRange::new(40.0, 60.0);

    /// Verifica se todos os campos numéricos estão dentro dos intervalos.
    pub fn contains(&self, reading: &SensorReading) -> bool {
        self.hr.contains(reading.hr)
            && self.spo2.contains(reading.spo2)
            && self.temp.contains(reading.temp)
            && self.hum.contains(reading.hum)
    }
}

impl Default for ReadingRanges {
    fn default() -> Self {
        Self {
            hr: Self::HR,
            spo2: Self::SPO2,
            temp: Self::TEMP,
            hum: Self::HUM,
        }
    }
}

/// Gera leituras para um único dispositivo.
///
/// O `device_id` é fixado na construção e não pode ser alterado depois.
pub struct ReadingGenerator<R = StdRng> {
    device_id: String,
    ranges: ReadingRanges,
    rng: R,
}

impl ReadingGenerator<StdRng> {
    /// Cria um gerador com fonte aleatória semeada pelo sistema.
    pub fn new(device_id: impl Into<String>) -> Self {
        Self::with_rng(device_id, StdRng::from_entropy())
    }
}

impl<R: Rng> ReadingGenerator<R> {
    /// Cria um gerador com uma fonte aleatória explícita (ex: semente fixa).
    pub fn with_rng(device_id: impl Into<String>, rng: R) -> Self {
        Self {
            device_id: device_id.into(),
            ranges: ReadingRanges::default(),
            rng,
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Gera uma leitura carimbada com o relógio local.
    pub fn generate(&mut self) -> SensorReading {
        self.generate_at(Local::now().naive_local())
    }

    /// Gera uma leitura carimbada com o instante informado.
    pub fn generate_at(&mut self, now: NaiveDateTime) -> SensorReading {
        SensorReading {
            device_id: self.device_id.clone(),
            hr: self.ranges.hr.sample(&mut self.rng),
            spo2: self.ranges.spo2.sample(&mut self.rng),
            temp: self.ranges.temp.sample(&mut self.rng),
            hum: self.ranges.hum.sample(&mut self.rng),
            recv_time: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seeded(seed: u64) -> ReadingGenerator<StdRng> {
        ReadingGenerator::with_rng("ESP32_TEST_01", StdRng::seed_from_u64(seed))
    }

    #[test]
    fn values_stay_within_ranges() {
        let mut generator = seeded(7);
        let ranges = ReadingRanges::default();
        for _ in 0..10_000 {
            let r = generator.generate();
            assert!(ranges.contains(&r), "Leitura fora do intervalo: {r:?}");
        }
    }

    #[test]
    fn device_id_is_constant() {
        let mut generator = ReadingGenerator::new("ESP32_TEST_01");
        let ids: Vec<_> = (0..50).map(|_| generator.generate().device_id).collect();
        assert!(ids.iter().all(|id| id == "ESP32_TEST_01"));
        assert_eq!(generator.device_id(), "ESP32_TEST_01");
    }

    #[test]
    fn successive_readings_differ() {
        let mut generator = seeded(42);
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!((a.hr, a.spo2, a.temp, a.hum), (b.hr, b.spo2, b.temp, b.hum));
    }

    #[test]
    fn same_seed_same_values() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let a = seeded(1).generate_at(now);
        let b = seeded(1).generate_at(now);
        assert_eq!(a, b);
    }

    #[test]
    fn generate_at_formats_timestamp() {
        let now = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(8, 0, 9)
            .unwrap();
        let r = seeded(3).generate_at(now);
        assert_eq!(r.recv_time, "2024-12-31 08:00:09");
    }

    #[test]
    fn timestamps_are_valid_and_non_decreasing() {
        let mut generator = seeded(9);
        let mut last = None;
        for _ in 0..20 {
            let ts = generator.generate().recv_time_parsed().expect("timestamp inválido");
            if let Some(prev) = last {
                assert!(ts >= prev);
            }
            last = Some(ts);
        }
    }

    #[test]
    fn range_is_half_open() {
        let range = VitalRange::new(40.0, 60.0);
        assert!(range.contains(40.0));
        assert!(range.contains(59.999));
        assert!(!range.contains(60.0));
        assert!(!range.contains(39.999));
    }
}
