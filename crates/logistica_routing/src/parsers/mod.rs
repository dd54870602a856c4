pub mod parser;
pub mod road_file;
