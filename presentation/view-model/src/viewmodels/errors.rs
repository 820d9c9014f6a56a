use serde::{Serialize, Serializer};

/// Failures surfaced to the view layer. The display text is the fixed
/// message shown to the user; the underlying cause is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProductViewError {
    #[error("Error al cargar los productos")]
    LoadFailed,
    #[error("Producto no encontrado")]
    NotFound,
    #[error("Error al cargar el detalle del producto")]
    DetailFailed,
    #[error("Error en la búsqueda")]
    SearchFailed,
    #[error("Error al filtrar por categoría")]
    CategoryFailed,
}

impl Serialize for ProductViewError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
