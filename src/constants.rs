/// Application-wide constants for icon layout, artwork upscaling and chime synthesis

pub mod icon {
    /// Canvas size for the app icon and the adaptive foreground
    pub const SIZE: u32 = 1024;

    /// Corner radius of the rounded-rect clip applied to the app icon
    pub const CORNER_RADIUS: u32 = 180;

    /// Fraction of the canvas the brand artwork fills on the app icon
    pub const CONTENT_SCALE: f32 = 0.68;

    /// Android adaptive icons use a 108dp grid with a 72dp safe zone (66.7%).
    /// The foreground artwork is scaled to 58% for extra safety.
    pub const SAFE_ZONE: f32 = 0.58;
}

pub mod gradient {
    /// Pastel brand gradient stops: pink -> purple -> blue
    pub const PINK: &str = "#FFB3C6";
    pub const PURPLE: &str = "#B388EB";
    pub const BLUE: &str = "#8BD3E6";
}

pub mod upscale {
    /// Longest side of the enhanced brand artwork
    pub const TARGET_LONG_SIDE: u32 = 2048;

    /// Unsharp mask parameters used to recover detail after the resize
    pub const UNSHARP_SIGMA: f32 = 2.0;
    pub const UNSHARP_THRESHOLD: i32 = 3;

    /// Mild contrast and saturation boosts applied after sharpening
    pub const CONTRAST_FACTOR: f32 = 1.1;
    pub const SATURATION_FACTOR: f32 = 1.15;
}

pub mod chime {
    /// Output sample rate (Hz)
    pub const SAMPLE_RATE: u32 = 44100;

    /// Total chime length in seconds
    pub const TOTAL_DURATION: f32 = 0.8;

    /// Linear attack applied to the start of every tone (5ms)
    pub const ATTACK_DURATION: f32 = 0.005;

    /// Per-note volume before the final normalization pass
    pub const NOTE_VOLUME: f32 = 0.5;

    /// Peak amplitude of the normalized chime
    pub const TARGET_PEAK: f32 = 0.7;

    /// Ascending music-box arpeggio: (frequency Hz, duration s, onset s)
    /// E5, G5, B5, then E6 held a little longer
    pub const NOTES: [(f32, f32, f32); 4] = [
        (659.25, 0.15, 0.0),
        (783.99, 0.15, 0.12),
        (987.77, 0.15, 0.24),
        (1318.5, 0.25, 0.36),
    ];

    /// Quiet high-frequency shimmer layered over the last note (E7)
    pub const SPARKLE: (f32, f32, f32) = (2637.0, 0.3, 0.36);
    pub const SPARKLE_VOLUME: f32 = 0.08;
}
