// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//
// Liste des modules:
//   - health : Health check API
//   - company : Symboles NSE avec compteurs likes / dislikes (SeaORM)
//   - dto : Data Transfer Objects pour les réponses API
//
// Points d'attention:
//   - Le symbole est la clé primaire, toujours stocké en majuscules
//   - La table est créée au démarrage si elle n'existe pas (db::ensure_schema)
//
// ============================================================================

pub mod health;
pub mod company;
pub mod dto;
