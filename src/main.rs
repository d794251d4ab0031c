// Entrypoint for the upload client.
// - The flow is linear: read both image files, send one multipart POST to
//   the local gallery server, print the final URL and the raw body.
// - Returns `anyhow::Result` so any failure exits non-zero.

use gallery_upload_cli::api::{ApiClient, DEFAULT_BASE_URL};
use gallery_upload_cli::payload::FilePayload;

fn main() -> anyhow::Result<()> {
    // Both files must be readable before any request exists.
    let image = FilePayload::from_path("test2_resized.jpg", "test2.jpg", "image/jpeg")?;
    let thumbnail = FilePayload::from_path("test2_thumb.jpg", "test2.jpg", "image/jpeg")?;

    let api = ApiClient::new(DEFAULT_BASE_URL)?;
    let outcome = api.upload_gallery_image(image, thumbnail)?;

    println!("{}", outcome.url);
    println!("{}", outcome.body);
    Ok(())
}
