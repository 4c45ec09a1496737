pub mod get_coord;
pub mod pixel_to_plane_coords;
