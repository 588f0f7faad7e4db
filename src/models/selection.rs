//! Mapping user choices to dithering methods and modes.
//!
//! Fallbacks live here, at the boundary. The core library only offers exact
//! lookups.

use bilevel_dither::{ColorMode, DitherAlgorithm};

/// Method used when the user's choice is not recognized.
pub const DEFAULT_ALGORITHM: DitherAlgorithm = DitherAlgorithm::Atkinson;

/// Menu labels, in the order of their numeric choices (1-based).
pub const METHOD_MENU: [(DitherAlgorithm, &str); 4] = [
    (DitherAlgorithm::Atkinson, "Atkinson"),
    (DitherAlgorithm::FloydSteinberg, "FloydSteinberg"),
    (DitherAlgorithm::Shtuki, "Shtuki"),
    (DitherAlgorithm::SierraLite, "Sierra Lite"),
];

/// Look up a method by menu number (`"1"`..`"4"`) or by name.
///
/// Returns `None` for anything else.
pub fn parse_algorithm(choice: &str) -> Option<DitherAlgorithm> {
    let choice = choice.trim();
    if let Ok(n) = choice.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| METHOD_MENU.get(i))
            .map(|(algo, _)| *algo);
    }
    DitherAlgorithm::from_name(choice)
}

/// Resolve a method choice, falling back to Atkinson for unknown input.
pub fn resolve_algorithm(choice: &str) -> DitherAlgorithm {
    parse_algorithm(choice).unwrap_or_else(|| {
        tracing::warn!(
            choice = %choice.trim(),
            fallback = %DEFAULT_ALGORITHM,
            "Unknown dithering method, using default"
        );
        DEFAULT_ALGORITHM
    })
}

/// Resolve a mode choice.
///
/// `"1"`, `"color"` and `"colour"` select colour; everything else is mono.
pub fn resolve_mode(choice: &str) -> ColorMode {
    match choice.trim().to_ascii_lowercase().as_str() {
        "1" | "color" | "colour" => ColorMode::Color,
        "2" | "mono" => ColorMode::Mono,
        other => {
            tracing::debug!(choice = %other, "Unrecognized mode, using mono");
            ColorMode::Mono
        }
    }
}
