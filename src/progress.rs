pub use indicatif::ProgressBar;
use indicatif::ProgressStyle;

pub fn sequences(size: usize) -> ProgressBar {
    with_prefix(size, "  ")
}

pub fn with_prefix(size: usize, prefix: &str) -> ProgressBar {
    let template = format!(
        "{}{}",
        prefix, "{wide_bar} {pos}/{len} sequences [{elapsed} elapsed; {eta} left]"
    );

    let progress = ProgressBar::new(size as u64);
    progress.set_draw_delta(size as u64 / 1000);
    progress.set_style(ProgressStyle::default_bar().template(&template));

    progress
}
