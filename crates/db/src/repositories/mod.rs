pub mod wallpaper_repo;

pub use wallpaper_repo::WallpaperRepo;
