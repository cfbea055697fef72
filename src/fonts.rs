use crate::resume::FontFamily;

/// Register one named egui family per [`FontFamily`] tag.
///
/// Only the bundled proportional faces ship with the app, so every name
/// resolves to them on screen; the HTML export carries the real typefaces.
pub fn install_font_families(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for family in FontFamily::ALL {
        fonts
            .families
            .insert(egui::FontFamily::Name(family.class_name().into()), proportional.clone());
    }
    ctx.set_fonts(fonts);
}

/// The egui family for `family`, or the default proportional one until
/// [`install_font_families`] has taken effect (fonts apply from the next pass).
pub fn resolve_family(ctx: &egui::Context, family: FontFamily) -> egui::FontFamily {
    let named = egui::FontFamily::Name(family.class_name().into());
    if ctx.fonts(|fonts| fonts.families().contains(&named)) {
        named
    } else {
        egui::FontFamily::Proportional
    }
}
