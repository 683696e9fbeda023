//! Bundled demo directory used when no backend is configured.

use crate::network::{Company, Department, EntitySnapshot, Event, Person, Skill};

#[allow(clippy::too_many_arguments)]
fn person(
	id: &str,
	name: &str,
	avatar: u8,
	department: &str,
	company: &str,
	job_title: &str,
	skills: &[&str],
	graduation_year: u16,
	email: &str,
	events: &[&str],
	bio: &str,
	role: &str,
) -> Person {
	Person {
		id: id.into(),
		name: name.into(),
		avatar: format!("https://i.pravatar.cc/150?img={avatar}"),
		department: department.into(),
		company: company.into(),
		job_title: job_title.into(),
		skills: skills.iter().map(|s| s.to_string()).collect(),
		graduation_year,
		email: email.into(),
		events: events.iter().map(|e| e.to_string()).collect(),
		bio: Some(bio.into()),
		role: Some(role.into()),
	}
}

fn department(id: &str, name: &str, faculty: &str) -> Department {
	Department {
		id: id.into(),
		name: name.into(),
		faculty: faculty.into(),
	}
}

fn company(id: &str, name: &str, industry: &str, location: &str) -> Company {
	Company {
		id: id.into(),
		name: name.into(),
		industry: industry.into(),
		location: location.into(),
	}
}

fn skill(id: &str, name: &str, category: &str) -> Skill {
	Skill {
		id: id.into(),
		name: name.into(),
		category: category.into(),
	}
}

fn event(id: &str, name: &str, date: &str, location: &str, kind: &str) -> Event {
	Event {
		id: id.into(),
		name: name.into(),
		date: date.into(),
		location: location.into(),
		kind: kind.into(),
	}
}

/// Six alumni and the departments, companies, skills and events they reference.
pub fn sample_snapshot() -> EntitySnapshot {
	EntitySnapshot {
		people: vec![
			person(
				"a1",
				"Sarah Johnson",
				1,
				"d1",
				"c1",
				"Software Engineer",
				&["s1", "s2", "s3"],
				2018,
				"sarah.j@example.com",
				&["e1", "e3"],
				"Experienced software engineer with a passion for building user-friendly applications.",
				"Full Stack Developer",
			),
			person(
				"a2",
				"Michael Chen",
				3,
				"d1",
				"c2",
				"Data Scientist",
				&["s2", "s4", "s5"],
				2019,
				"michael.c@example.com",
				&["e2", "e3"],
				"Data scientist with a strong background in machine learning.",
				"AI/ML Specialist",
			),
			person(
				"a3",
				"Emily Rodriguez",
				5,
				"d2",
				"c3",
				"UX Designer",
				&["s6", "s7"],
				2020,
				"emily.r@example.com",
				&["e1", "e4"],
				"UX designer focused on intuitive and accessible interfaces.",
				"Senior Designer",
			),
			person(
				"a4",
				"David Kim",
				8,
				"d3",
				"c1",
				"Product Manager",
				&["s8", "s9", "s3"],
				2017,
				"david.k@example.com",
				&["e2", "e4"],
				"Product manager with experience leading cross-functional teams.",
				"Product Lead",
			),
			person(
				"a5",
				"Lisa Wang",
				9,
				"d2",
				"c4",
				"Marketing Specialist",
				&["s10", "s11"],
				2021,
				"lisa.w@example.com",
				&["e3", "e4"],
				"Marketing specialist focused on digital campaigns and social media.",
				"Digital Marketing Manager",
			),
			person(
				"a6",
				"Robert Taylor",
				12,
				"d4",
				"c5",
				"Financial Analyst",
				&["s12", "s13"],
				2019,
				"robert.t@example.com",
				&["e1", "e5"],
				"Financial analyst with expertise in investment analysis and modeling.",
				"Senior Financial Analyst",
			),
		],
		departments: vec![
			department("d1", "Computer Science", "Engineering"),
			department("d2", "Business Administration", "Business"),
			department("d3", "Economics", "Social Sciences"),
			department("d4", "Finance", "Business"),
		],
		companies: vec![
			company("c1", "Google", "Technology", "Mountain View, CA"),
			company("c2", "Microsoft", "Technology", "Redmond, WA"),
			company("c3", "Apple", "Technology", "Cupertino, CA"),
			company("c4", "Facebook", "Technology", "Menlo Park, CA"),
			company("c5", "JP Morgan", "Finance", "New York, NY"),
		],
		skills: vec![
			skill("s1", "JavaScript", "Programming"),
			skill("s2", "Python", "Programming"),
			skill("s3", "React", "Web Development"),
			skill("s4", "Data Analysis", "Data Science"),
			skill("s5", "Machine Learning", "Data Science"),
			skill("s6", "UI Design", "Design"),
			skill("s7", "User Research", "Design"),
			skill("s8", "Product Management", "Management"),
			skill("s9", "Agile", "Management"),
			skill("s10", "Digital Marketing", "Marketing"),
			skill("s11", "Social Media", "Marketing"),
			skill("s12", "Financial Modeling", "Finance"),
			skill("s13", "Investment Analysis", "Finance"),
		],
		events: vec![
			event(
				"e1",
				"Annual Alumni Reunion",
				"2023-05-15",
				"University Campus",
				"Networking",
			),
			event(
				"e2",
				"Tech Industry Panel",
				"2023-07-22",
				"Virtual",
				"Panel Discussion",
			),
			event(
				"e3",
				"Career Fair 2023",
				"2023-09-10",
				"University Campus",
				"Career",
			),
			event(
				"e4",
				"Leadership Workshop",
				"2023-11-05",
				"Downtown Conference Center",
				"Workshop",
			),
			event(
				"e5",
				"Entrepreneurship Summit",
				"2024-01-20",
				"Business School",
				"Conference",
			),
		],
	}
}
