//! save-images.sh rendering
//!
//! The generated script pulls and saves every image, writes a companion
//! `load-images.sh` with one `docker load` line per image, then compresses
//! the whole output directory into a timestamped `.tgz`.

/// Script skeleton; `{image_list}` is the only substitution point
pub const SAVE_IMAGES_TEMPLATE: &str = include_str!("templates/save-images.sh");

/// Placeholder replaced by the quoted image lines
pub const IMAGE_LIST_PLACEHOLDER: &str = "{image_list}";

/// Format the `DOCKER_IMAGE_NAMES` array body, one quoted image per line
pub fn image_list_block(images: &[String]) -> String {
    images
        .iter()
        .map(|image| format!("  \"{image}\"\n"))
        .collect()
}

/// Render the save-images.sh script for `images`
///
/// Output depends only on `images`, including their order and duplicates.
pub fn render(images: &[String]) -> String {
    SAVE_IMAGES_TEMPLATE.replacen(IMAGE_LIST_PLACEHOLDER, &image_list_block(images), 1)
}
