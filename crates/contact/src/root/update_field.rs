use std::str::FromStr;

use crate::Field;

impl super::Command {
    /// Overwrites one field. Any value is accepted, the status is left as is.
    pub async fn update_field(&self, field: Field, value: impl Into<String>) {
        self.state.lock().await.fields.set(field, value);
    }

    pub async fn update_field_named(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> folio_shared::Result<()> {
        let Ok(field) = Field::from_str(name) else {
            return Err(folio_shared::Error::UnknownField(name.to_owned()));
        };

        self.update_field(field, value).await;

        Ok(())
    }
}
