// Firestore REST implementation of `PuzzleStore`.
//
// Documents live at `projects/{project}/databases/(default)/documents/puzzles/{id}`
// and carry two typed fields:
//
// ```json
// { "fields": {
//     "puzzleId": { "integerValue": "100" },
//     "data":     { "stringValue": "{\"questions\":[...],\"link\":...}" } } }
// ```
//
// The puzzle is kept as one JSON string rather than mapped onto Firestore's
// nested value types, so the reader can hand it to the client unchanged.

use crate::config::FirebaseConfig;
use crate::core::auth::AccessToken;
use crate::core::puzzle::{Puzzle, PuzzleId, PuzzleStore, StoreError};
use crate::core::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "puzzles";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntegerValue {
    /// Firestore serialises int64 as a decimal string; older emulators send a number.
    #[serde(with = "int64_as_string")]
    integer_value: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StringValue {
    string_value: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PuzzleFields {
    puzzle_id: Option<IntegerValue>,
    data: Option<StringValue>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PuzzleDocument {
    fields: PuzzleFields,
}

impl PuzzleDocument {
    fn new(id: PuzzleId, puzzle: &Puzzle) -> Result<Self, StoreError> {
        Ok(Self {
            fields: PuzzleFields {
                puzzle_id: Some(IntegerValue {
                    integer_value: id.value(),
                }),
                data: Some(StringValue {
                    string_value: serde_json::to_string(puzzle)?,
                }),
            },
        })
    }

    fn into_data(self) -> Result<String, StoreError> {
        self.fields
            .data
            .map(|d| d.string_value)
            .ok_or_else(|| StoreError::MalformedDocument("missing `data.stringValue`".to_string()))
    }
}

mod int64_as_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

pub struct FirestorePuzzleStore {
    client: Client,
    base_url: String,
    project_id: String,
    retry: RetryPolicy,
}

impl FirestorePuzzleStore {
    pub fn new(client: Client, config: &FirebaseConfig, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url: config.firestore_base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            retry,
        }
    }

    pub fn document_url(&self, id: PuzzleId) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, COLLECTION, id
        )
    }

    async fn put_once(
        &self,
        token: &AccessToken,
        id: PuzzleId,
        document: &PuzzleDocument,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(self.document_url(id))
            .header("Authorization", token.bearer_header())
            .json(document)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            tracing::error!(
                status = status.as_u16(),
                %body,
                puzzle_id = %id,
                "Firestore write failed"
            );
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl PuzzleStore for FirestorePuzzleStore {
    async fn put(
        &self,
        token: &AccessToken,
        id: PuzzleId,
        puzzle: &Puzzle,
    ) -> Result<(), StoreError> {
        let document = PuzzleDocument::new(id, puzzle)?;

        self.retry
            .run("Firestore write", StoreError::is_transient, || {
                self.put_once(token, id, &document)
            })
            .await?;

        tracing::info!(puzzle_id = %id, "Stored puzzle in Firestore");
        Ok(())
    }

    async fn get_raw(&self, token: &AccessToken, id: PuzzleId) -> Result<String, StoreError> {
        let response = self
            .client
            .get(self.document_url(id))
            .header("Authorization", token.bearer_header())
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            tracing::warn!(puzzle_id = %id, "Puzzle document not found");
            return Err(StoreError::NotFound(id));
        }

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                %body,
                puzzle_id = %id,
                "Firestore read failed"
            );
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let document: PuzzleDocument = serde_json::from_str(&body)?;
        document.into_data()
    }
}
