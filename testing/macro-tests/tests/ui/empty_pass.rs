use vista::Projection;

#[derive(Projection)]
pub struct Heartbeat {}

fn main() {
    let _content: HeartbeatContent = Heartbeat {}.to_content();
}
