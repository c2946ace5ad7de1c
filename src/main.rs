use plexus::error::HostError;
use plexus::window;
use plexus::FieldConfig;

fn main() -> Result<(), HostError> {
    window::run(FieldConfig::new())
}
