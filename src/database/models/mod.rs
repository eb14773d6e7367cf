pub mod attendance;
pub mod logbook;
pub mod meeting;
pub mod member;
pub mod membership;
pub mod workgroup;

pub use attendance::{Attendance, AttendanceInput};
pub use logbook::{LogbookEntry, LogbookInput};
pub use meeting::{Meeting, MeetingInput};
pub use member::{Member, MemberInput};
pub use membership::{Membership, MembershipInput};
pub use workgroup::{Workgroup, WorkgroupInput};
