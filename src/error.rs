use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError
{
    #[error("graal compiler was not found")]
    MissingRuntime,
    #[error("'{0}' expects a value, but none followed")]
    MalformedArgument(String),
    #[error("no usable JDK: {0}")]
    JdkNotFound(String),
    #[error("failed to execute java: {0}")]
    Spawn(#[from] std::io::Error),
}
