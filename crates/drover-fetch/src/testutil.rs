//! Canned HTTP responses and fixture archives for tests.

use std::io::{Read, Write};
use std::net::TcpListener;

/// Serve one canned HTTP response on an ephemeral local port and return
/// the URL to request.
pub fn serve_once(status_line: &'static str, content_type: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        // Drain the request head before responding
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }

        let header = format!(
            "{status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(header.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
    });

    format!("http://{addr}")
}

/// Build an in-memory zip shaped like a chromedriver release archive:
/// a `chromedriver-<platform>` directory holding the executable and a
/// license file.
pub fn driver_zip(platform: &str, payload: &[u8]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer
        .add_directory(format!("chromedriver-{platform}/"), options)
        .unwrap();
    writer
        .start_file(format!("chromedriver-{platform}/chromedriver"), options)
        .unwrap();
    writer.write_all(payload).unwrap();
    writer
        .start_file(
            format!("chromedriver-{platform}/LICENSE.chromedriver"),
            options,
        )
        .unwrap();
    writer.write_all(b"fixture license text").unwrap();

    writer.finish().unwrap().into_inner()
}
