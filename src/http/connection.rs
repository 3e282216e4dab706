use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::fs::resolver;
use crate::http::mime;
use crate::http::parser;
use crate::http::path;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One accepted connection and its receive buffer capacity.
///
/// Exclusively owned by the task handling it; `serve` consumes the
/// connection so the stream is closed on every exit path.
pub struct Connection {
    stream: TcpStream,
    max_request_bytes: usize,
}

impl Connection {
    pub fn new(stream: TcpStream, max_request_bytes: usize) -> Self {
        Self {
            stream,
            max_request_bytes,
        }
    }

    /// Performs exactly one request/response cycle, then closes the
    /// connection.
    ///
    /// The request line must arrive within the first read; nothing is
    /// reassembled across reads. A request that does not match the
    /// supported grammar is dropped without sending a byte.
    pub async fn serve(mut self) -> anyhow::Result<()> {
        let mut buf = vec![0u8; self.max_request_bytes];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(());
        }

        let target = match parser::parse_request_line(&buf[..n]) {
            Ok(target) => target,
            Err(e) => {
                debug!("Dropping unparseable request: {:?}", e);
                return Ok(());
            }
        };

        let decoded = path::percent_decode(target);
        let response = match resolver::read_file(&decoded).await {
            Some(body) => {
                let content_type = mime::from_extension(path::extension(&decoded));
                Response::file(content_type, body)
            }
            None => Response::not_found(),
        };
        debug!(
            "GET /{} -> {}",
            String::from_utf8_lossy(&decoded),
            response.status.as_u16()
        );

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }
}
