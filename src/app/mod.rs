// Application layer - Use case interactors

pub mod concat_interactor;
pub mod container;
pub mod info_interactor;
pub mod split_interactor;
pub mod timelapse_interactor;

// Re-export interactors
pub use concat_interactor::ConcatInteractor;
pub use container::AppContainer;
pub use info_interactor::InfoInteractor;
pub use split_interactor::SplitInteractor;
pub use timelapse_interactor::TimelapseInteractor;
