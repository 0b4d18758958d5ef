use std::fmt::Write as _;

use crate::tables::backgrounds::{GradientDef, SKY_GRADIENT_ID, gradient};

/// Id of the shared drop-shadow filter.
pub(crate) const SHADOW_FILTER_ID: &str = "shadow";

/// `filter` attribute value pointing at the shared drop shadow.
pub(crate) fn shadow_ref() -> String {
    format!("url(#{SHADOW_FILTER_ID})")
}

/// Shared `<defs>` block: the drop-shadow filter and the sky gradient, plus `extra` when a
/// background references a gradient that is not already defined.
pub(crate) fn defs(extra: Option<&GradientDef>) -> String {
    let mut out = String::from("<defs>\n");
    let _ = write!(
        out,
        r#"    <filter id="{SHADOW_FILTER_ID}" x="-20%" y="-20%" width="140%" height="140%">
        <feDropShadow dx="2" dy="4" stdDeviation="3" flood-opacity="0.3"/>
    </filter>
"#
    );

    if let Some(sky) = gradient(SKY_GRADIENT_ID) {
        write_gradient(&mut out, sky);
    }
    if let Some(g) = extra.filter(|g| g.id != SKY_GRADIENT_ID) {
        write_gradient(&mut out, g);
    }

    out.push_str("</defs>");
    out
}

fn write_gradient(out: &mut String, g: &GradientDef) {
    let _ = write!(
        out,
        r#"    <linearGradient id="{}" x1="0%" y1="0%" x2="0%" y2="100%">
        <stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/>
    </linearGradient>
"#,
        g.id, g.top, g.bottom
    );
}
