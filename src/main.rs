use quest_cam_calib::config::{DEFAULT_STREAM_HEIGHT, DEFAULT_STREAM_WIDTH};
use quest_cam_calib::global_cast::{Quaterniond, Rotator, Vector3d};
use quest_cam_calib::{get_calibration, CameraSide};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_nanos()
        .init();

    for side in [CameraSide::Left, CameraSide::Right] {
        let calib = get_calibration(side, DEFAULT_STREAM_WIDTH, DEFAULT_STREAM_HEIGHT);
        log::info!(
            "{} camera {}: stream {}x{} fx={:.2} fy={:.2} cx={:.2} cy={:.2}",
            side.label(),
            calib.camera_id,
            calib.stream.width,
            calib.stream.height,
            calib.stream.fx,
            calib.stream.fy,
            calib.stream.cx,
            calib.stream.cy
        );
        log::info!(
            "{} CamInHmd: t={}cm r={} ({})",
            side.label(),
            Vector3d(calib.pose.translation),
            Quaterniond(calib.pose.rotation),
            Rotator::from(&calib.pose.rotation)
        );
        println!("{}", serde_json::to_string_pretty(&calib)?);
    }
    Ok(())
}
