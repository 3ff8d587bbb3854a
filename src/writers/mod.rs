pub mod chart_writer;

pub use chart_writer::ChartWriter;
