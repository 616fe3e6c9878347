use anyhow::Context;

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

impl<T> GraphqlResponse<T> {
    pub(crate) fn into_data(self) -> anyhow::Result<T> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            let msg = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            anyhow::bail!("GraphQL returned errors: {msg}");
        }
        self.data.context("GraphQL response missing data")
    }
}
