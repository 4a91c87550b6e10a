use crate::domain::model::{CsvOutput, SchemaPolicy, WebinarRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn schema_policy(&self) -> SchemaPolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<WebinarRecord>>;
    async fn transform(&self, records: Vec<WebinarRecord>) -> Result<CsvOutput>;
    /// Returns the path the output was written to.
    async fn load(&self, output: CsvOutput) -> Result<String>;
}
