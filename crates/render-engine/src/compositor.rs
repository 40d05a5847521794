//! Frame compositor: paints every element of a field onto a surface.

use toolfield_field_model::element::DecorativeElement;

use crate::shapes::paint_shape;
use crate::surface::DrawSurface;

/// Clear the surface and paint each element at its pose.
///
/// Nothing from the previous frame survives (no trails). Elements are
/// painted in slice order; there is no z-ordering between them.
pub fn render_frame(surface: &mut dyn DrawSurface, elements: &[DecorativeElement]) {
    surface.clear();
    for element in elements {
        surface.save();
        surface.translate(element.x, element.y);
        surface.rotate(element.rotation);
        surface.set_global_alpha(element.opacity);
        paint_shape(surface, element.variant, element.size);
        surface.restore();
    }
}
