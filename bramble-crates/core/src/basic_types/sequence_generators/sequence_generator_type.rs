/// The sequence used to space out restarts, measured in failures.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SequenceGeneratorType {
    /// Restart every `base_interval` failures.
    #[default]
    Constant,
    /// The interval starts at `base_interval` and is multiplied by a constant after every
    /// restart.
    Geometric,
    /// The Luby sequence `1 1 2 1 1 2 4 1 ...` scaled by `base_interval`.
    Luby,
}
