// Library root
// -----------
// This crate exposes a small library surface for the upload binary. The
// binary (`main.rs`) wires these modules into the single-shot flow.
//
// Module responsibilities:
// - `payload`: The (filename, media type, bytes) triple read from disk
//   that becomes one multipart part.
// - `api`: Encapsulates the HTTP interaction with the gallery server
//   (one multipart POST to /api/upload).
//
// Keeping this separation makes the wire-level behavior testable without
// going through the binary.
pub mod api;
pub mod payload;
