use sprite_resize::config::SpriteConfig;
use sprite_resize::imaging::{RustBackend, resize_sprite};
use sprite_resize::output;

fn main() {
    let config = SpriteConfig::default();
    let result = resize_sprite(&RustBackend::new(), &config);
    // Failures are printed, never turned into a non-zero exit
    output::print_outcome(&config.input, &result);
}
