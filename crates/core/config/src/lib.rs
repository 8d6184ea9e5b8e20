use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub use tracing;
pub use tracing_subscriber;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Marquee.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Marquee.toml").exists() {
            builder = builder.add_source(File::new("Marquee.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FilesS3 {
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub default_bucket: String,
    pub public_base: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FilesLimit {
    pub image_size: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Files {
    pub s3: FilesS3,
    pub limit: FilesLimit,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub files: Files,
}

pub async fn init() {
    println!(
        ":: Marquee Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

/// Configure logging and print the active configuration for a given service
#[macro_export]
macro_rules! configure {
    ($application: ident) => {
        {
            use $crate::tracing_subscriber::layer::SubscriberExt;
            use $crate::tracing_subscriber::util::SubscriberInitExt;

            $crate::tracing_subscriber::registry()
                .with(
                    $crate::tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| {
                            concat!(stringify!($application), "=info,marquee=info").into()
                        }),
                )
                .with($crate::tracing_subscriber::fmt::layer())
                .init();

            $crate::init().await;
        }
    };
}

/// Report an error to the logs and convert it to an internal error
#[macro_export]
macro_rules! report_internal_error {
    ($expr: expr) => {
        $expr
            .inspect_err(|err| $crate::tracing::error!("{err:?}"))
            .map_err(|_| create_error!(InternalError))
    };
}

#[cfg(test)]
mod tests {
    use crate::init;

    #[tokio::test]
    async fn it_works() {
        init().await;
    }
}
