//! The design token table.
//!
//! Every leaf is a CSS custom-property reference. Flat categories use
//! `var(--<prefix>-<key>)` with the category prefix; nested categories use
//! a prefix specific to their sub-table.

use crate::types::TokenEntry::{self, Leaf, Node};

pub(super) const COLORS: &[(&str, TokenEntry)] = &[
    ("primary", Leaf("var(--color-primary)")),
    ("primary-foreground", Leaf("var(--color-primary-foreground)")),
    ("secondary", Leaf("var(--color-secondary)")),
    ("secondary-foreground", Leaf("var(--color-secondary-foreground)")),
    ("accent", Leaf("var(--color-accent)")),
    ("accent-foreground", Leaf("var(--color-accent-foreground)")),
    ("success", Leaf("var(--color-success)")),
    ("warning", Leaf("var(--color-warning)")),
    ("destructive", Leaf("var(--color-destructive)")),
    ("destructive-foreground", Leaf("var(--color-destructive-foreground)")),
    ("muted", Leaf("var(--color-muted)")),
    ("muted-foreground", Leaf("var(--color-muted-foreground)")),
    ("background", Leaf("var(--color-background)")),
    ("foreground", Leaf("var(--color-foreground)")),
    ("card", Leaf("var(--color-card)")),
    ("card-foreground", Leaf("var(--color-card-foreground)")),
    ("popover", Leaf("var(--color-popover)")),
    ("popover-foreground", Leaf("var(--color-popover-foreground)")),
    ("border", Leaf("var(--color-border)")),
    ("input", Leaf("var(--color-input)")),
    ("ring", Leaf("var(--color-ring)")),
];

pub(super) const SPACING: &[(&str, TokenEntry)] = &[
    ("xs", Leaf("var(--spacing-xs)")),
    ("sm", Leaf("var(--spacing-sm)")),
    ("md", Leaf("var(--spacing-md)")),
    ("lg", Leaf("var(--spacing-lg)")),
    ("xl", Leaf("var(--spacing-xl)")),
    ("2xl", Leaf("var(--spacing-2xl)")),
    ("3xl", Leaf("var(--spacing-3xl)")),
];

const FONT_FAMILY: &[(&str, TokenEntry)] = &[
    ("sans", Leaf("var(--font-sans)")),
    ("mono", Leaf("var(--font-mono)")),
];

const FONT_SIZE: &[(&str, TokenEntry)] = &[
    ("xs", Leaf("var(--font-size-xs)")),
    ("sm", Leaf("var(--font-size-sm)")),
    ("base", Leaf("var(--font-size-base)")),
    ("lg", Leaf("var(--font-size-lg)")),
    ("xl", Leaf("var(--font-size-xl)")),
    ("2xl", Leaf("var(--font-size-2xl)")),
    ("3xl", Leaf("var(--font-size-3xl)")),
    ("4xl", Leaf("var(--font-size-4xl)")),
];

const FONT_WEIGHT: &[(&str, TokenEntry)] = &[
    ("normal", Leaf("var(--font-weight-normal)")),
    ("medium", Leaf("var(--font-weight-medium)")),
    ("semibold", Leaf("var(--font-weight-semibold)")),
    ("bold", Leaf("var(--font-weight-bold)")),
];

const LINE_HEIGHT: &[(&str, TokenEntry)] = &[
    ("tight", Leaf("var(--line-height-tight)")),
    ("normal", Leaf("var(--line-height-normal)")),
    ("relaxed", Leaf("var(--line-height-relaxed)")),
];

pub(super) const TYPOGRAPHY: &[(&str, TokenEntry)] = &[
    ("fontFamily", Node(FONT_FAMILY)),
    ("fontSize", Node(FONT_SIZE)),
    ("fontWeight", Node(FONT_WEIGHT)),
    ("lineHeight", Node(LINE_HEIGHT)),
];

const DURATION: &[(&str, TokenEntry)] = &[
    ("fast", Leaf("var(--motion-duration-fast)")),
    ("normal", Leaf("var(--motion-duration-normal)")),
    ("slow", Leaf("var(--motion-duration-slow)")),
];

const EASE: &[(&str, TokenEntry)] = &[
    ("in", Leaf("var(--motion-ease-in)")),
    ("out", Leaf("var(--motion-ease-out)")),
    ("in-out", Leaf("var(--motion-ease-in-out)")),
    ("bounce", Leaf("var(--motion-ease-bounce)")),
];

pub(super) const ANIMATIONS: &[(&str, TokenEntry)] = &[
    ("duration", Node(DURATION)),
    ("ease", Node(EASE)),
];

pub(super) const RADIUS: &[(&str, TokenEntry)] = &[
    ("none", Leaf("var(--radius-none)")),
    ("sm", Leaf("var(--radius-sm)")),
    ("md", Leaf("var(--radius-md)")),
    ("lg", Leaf("var(--radius-lg)")),
    ("xl", Leaf("var(--radius-xl)")),
    ("full", Leaf("var(--radius-full)")),
];

pub(super) const SHADOWS: &[(&str, TokenEntry)] = &[
    ("sm", Leaf("var(--shadow-sm)")),
    ("md", Leaf("var(--shadow-md)")),
    ("lg", Leaf("var(--shadow-lg)")),
    ("xl", Leaf("var(--shadow-xl)")),
    ("card", Leaf("var(--shadow-card)")),
];
