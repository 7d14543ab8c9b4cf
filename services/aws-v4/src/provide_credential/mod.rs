mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod params;
pub use params::ParamsCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;
