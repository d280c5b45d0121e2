// Newline-delimited JSON-RPC over stdin/stdout
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::client::HttpTransport;
use crate::handlers::McpServer;
use crate::rpc::{JsonRpcErrorResponse, INVALID_REQUEST, PARSE_ERROR};

/// Longest request line accepted, newline included.
pub const MAX_LINE_BYTES: u64 = 1024 * 1024;

pub async fn serve_stdio<T: HttpTransport>(server: &McpServer<T>) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(server, stdin, stdout).await
}

/// Answer one request per input line until EOF. Only I/O errors on the
/// reader or writer end the loop; bad lines get an error reply.
pub async fn serve<T, R, W>(server: &McpServer<T>, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    T: HttpTransport,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Server ready, waiting for requests on stdin");
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = (&mut reader)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut buf)
            .await?;
        if n == 0 {
            break;
        }

        let reply = if n as u64 == MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
            let skipped = skip_rest_of_line(&mut reader).await?;
            warn!("Dropped request line of more than {} bytes", n + skipped);
            Some(error_reply(INVALID_REQUEST, "Request too large"))
        } else {
            let line = buf.trim_ascii();
            if line.is_empty() {
                continue;
            }
            debug!("Received: {}", String::from_utf8_lossy(line));
            match serde_json::from_slice::<Value>(line) {
                Ok(request) => server.dispatch(request).await,
                Err(e) => {
                    debug!("Unparseable line: {}", e);
                    Some(error_reply(PARSE_ERROR, "Parse error"))
                }
            }
        };

        let Some(reply) = reply else {
            continue;
        };
        let mut out = serde_json::to_string(&reply)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

async fn skip_rest_of_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<usize> {
    let mut skipped = 0;
    loop {
        let chunk = reader.fill_buf().await?;
        if chunk.is_empty() {
            return Ok(skipped);
        }
        match chunk.iter().position(|b| *b == b'\n') {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(skipped + pos + 1);
            }
            None => {
                let len = chunk.len();
                reader.consume(len);
                skipped += len;
            }
        }
    }
}

fn error_reply(code: i32, message: &str) -> Value {
    let error = JsonRpcErrorResponse::new(Value::Null, code, message.to_string());
    serde_json::to_value(error).unwrap_or(Value::Null)
}
