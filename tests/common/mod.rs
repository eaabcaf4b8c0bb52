// common/mod.rs - Shared test utilities
//
// - A throwaway HTTP server on loopback so the real HTTP source can be
//   exercised without reaching Google
// - Helpers that build loaders over stub sources

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use gem_gallery::fixtures::sources::StaticSheetSource;
use gem_gallery::web_app::api::{SheetConfig, SheetDataLoader, SheetSource};

/// A loopback server answering a fixed number of requests
pub struct StubServer {
    /// `http://127.0.0.1:<port>`
    pub base_url: String,
    /// Request lines (`GET /path HTTP/1.1`) in arrival order
    pub requests: Receiver<String>,
}

impl StubServer {
    /// Export template pointing at this server
    pub fn template(&self) -> String {
        format!("{}/spreadsheets/d/{{sheet_id}}/export?format=csv", self.base_url)
    }

    /// Loader for `sheet_id` served by this server
    pub fn loader(&self, sheet_id: &str) -> SheetDataLoader {
        SheetDataLoader::new(SheetConfig::new(sheet_id).with_export_url_template(self.template()))
    }
}

/// Serve `count` requests with the same status and body, then stop
pub fn serve(status: u16, body: &str, count: usize) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let port = listener.local_addr().expect("local addr").port();
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming().take(count) {
            let Ok(mut stream) = stream else { continue };

            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // Drain headers
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) if line == "\r\n" || line == "\n" => break,
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }
            let _ = tx.send(request_line.trim_end().to_string());

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                500 => "Internal Server Error",
                _ => "Status",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    StubServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests: rx,
    }
}

/// Loader over a canned CSV body
pub fn static_loader(sheet_id: &str, csv: &str) -> SheetDataLoader {
    SheetDataLoader::with_source(
        SheetConfig::new(sheet_id),
        Arc::new(StaticSheetSource::new(csv)),
    )
}

/// Loader over any source
pub fn loader_with(sheet_id: &str, source: impl SheetSource + 'static) -> SheetDataLoader {
    SheetDataLoader::with_source(SheetConfig::new(sheet_id), Arc::new(source))
}
