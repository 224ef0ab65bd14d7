use std::fs::File;
use std::io::Write;
use std::path::Path;

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no CRC
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

/// 144 * 128000 / 44100, no padding
const FRAME_LEN: usize = 417;

fn syncsafe(mut n: u32) -> [u8; 4] {
    let mut out = [0u8; 4];
    for byte in out.iter_mut().rev() {
        *byte = (n & 0x7F) as u8;
        n >>= 7;
    }
    out
}

fn text_frame(id: &[u8; 4], text: &str) -> Vec<u8> {
    let mut body = vec![3u8]; // UTF-8
    body.extend_from_slice(text.as_bytes());

    let mut frame = Vec::with_capacity(10 + body.len());
    frame.extend_from_slice(id);
    frame.extend_from_slice(&syncsafe(body.len() as u32));
    frame.extend_from_slice(&[0, 0]);
    frame.extend_from_slice(&body);
    frame
}

/// Write a minimal MP3 (ID3v2.4 tag followed by silent frames)
///
/// `frames` is a list of (frame id, text) pairs, e.g. `(b"TIT2", "Title")`.
pub fn write_mp3(path: &Path, frames: &[(&[u8; 4], &str)]) -> std::io::Result<()> {
    let mut tag_body = Vec::new();
    for (id, text) in frames {
        tag_body.extend_from_slice(&text_frame(id, text));
    }

    let mut file = File::create(path)?;

    if !tag_body.is_empty() {
        file.write_all(b"ID3")?;
        file.write_all(&[4, 0, 0])?;
        file.write_all(&syncsafe(tag_body.len() as u32))?;
        file.write_all(&tag_body)?;
    }

    for _ in 0..8 {
        file.write_all(&FRAME_HEADER)?;
        file.write_all(&[0u8; FRAME_LEN - 4])?;
    }

    file.flush()
}
