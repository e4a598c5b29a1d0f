use std::{env, fs, path::PathBuf};

use subway_portfolio::icon::{render_png, IconError, ICON_SIZE};

/// Writes the favicon for static hosting, `public/icon.png` unless a path is given.
fn main() -> Result<(), IconError> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("public/icon.png"));
    let bytes = render_png()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, bytes)?;
    println!("wrote {}x{} icon to {}", ICON_SIZE, ICON_SIZE, path.display());
    Ok(())
}
