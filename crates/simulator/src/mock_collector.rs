//! Collector HTTP simulado para testes.
//!
//! Escuta em `127.0.0.1:<porta efêmera>` numa thread própria, registra cada
//! requisição num channel e responde com o status configurado por rota.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;
use vitals_core::protocol::REGISTER_PATH;

/// Requisição recebida pelo collector simulado.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

pub struct MockCollector {
    port: u16,
    rx: Receiver<RecordedRequest>,
}

impl MockCollector {
    /// Sobe o collector. `register_status` responde `/register`,
    /// `data_status` responde as demais rotas.
    pub fn start(register_status: u16, data_status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Falha ao bind do mock");
        let port = listener.local_addr().expect("endereço local").port();
        let (tx, rx) = unbounded();

        std::thread::Builder::new()
            .name("mock-collector".into())
            .spawn(move || {
                for stream in listener.incoming().flatten() {
                    let _ = handle(stream, &tx, register_status, data_status);
                }
            })
            .expect("Falha ao criar thread do mock");

        Self { port, rx }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Aguarda a próxima requisição (até 5s).
    pub fn next_request(&self) -> Option<RecordedRequest> {
        self.rx.recv_timeout(Duration::from_secs(5)).ok()
    }

    /// Todas as requisições já recebidas.
    pub fn received(&self) -> Vec<RecordedRequest> {
        self.rx.try_iter().collect()
    }
}

/// URL de uma porta local sem ninguém escutando.
pub fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Falha ao bind");
    let port = listener.local_addr().expect("endereço local").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn handle(
    stream: TcpStream,
    tx: &Sender<RecordedRequest>,
    register_status: u16,
    data_status: u16,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line.trim_end().is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;

    let status = if path == REGISTER_PATH {
        register_status
    } else {
        data_status
    };
    let _ = tx.send(RecordedRequest { method, path, body });

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {status} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        reason(status)
    )?;
    stream.flush()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
