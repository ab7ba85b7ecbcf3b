// Firestore access over its REST API. The core only sees `PuzzleStore`.

pub mod firestore_store;

pub use firestore_store::FirestorePuzzleStore;
