use aws_sdk_s3::{
    config::{Credentials, Region},
    Client, Config,
};
use marquee_config::{config, report_internal_error, FilesS3};
use marquee_result::{create_error, Result};

/// Create an S3 client
pub fn create_client(s3_config: FilesS3) -> Client {
    let provider_name = "marquee-creds";
    let creds = Credentials::new(
        s3_config.access_key_id,
        s3_config.secret_access_key,
        None,
        None,
        provider_name,
    );

    let config = Config::builder()
        .region(Region::new(s3_config.region))
        .endpoint_url(s3_config.endpoint)
        .credentials_provider(creds)
        .build();

    Client::from_conf(config)
}

/// Upload a file to S3 and return its public URL
///
/// Assets are public images; the URL is composed from the configured public
/// base and never expires.
pub async fn upload_to_s3(path: &str, buf: &[u8]) -> Result<String> {
    let config = config().await;
    let client = create_client(config.files.s3.clone());

    report_internal_error!(
        client
            .put_object()
            .bucket(&config.files.s3.default_bucket)
            .key(path)
            .body(buf.to_vec().into())
            .send()
            .await
    )?;

    Ok(format!(
        "{}/{}",
        config.files.s3.public_base.trim_end_matches('/'),
        path
    ))
}
