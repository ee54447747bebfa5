/// Versión del modelo de definición; entra al hash para invalidar
/// definiciones viejas si cambia el shape serializado.
pub const MODEL_VERSION: u32 = 1;
