/// Image byte fetcher
///
/// Downloads photo bytes (thumbnail or full size) and wraps them in an
/// iced image handle. Handles are cached by photo id in the application
/// state, so each image is fetched at most once per run; the grid shows a
/// placeholder until its thumbnail lands.

use iced::widget::image;

use super::client::FetchError;

/// Fetch one image and return its handle, tagged with the photo id so the
/// result can be routed back to the right cache slot
pub async fn fetch_image(
    client: reqwest::Client,
    photo_id: u64,
    url: String,
) -> (u64, Result<image::Handle, FetchError>) {
    (photo_id, fetch_bytes(client, url).await)
}

async fn fetch_bytes(
    client: reqwest::Client,
    url: String,
) -> Result<image::Handle, FetchError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Transport(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    Ok(image::Handle::from_bytes(bytes))
}
