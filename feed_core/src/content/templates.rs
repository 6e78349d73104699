//! Built-in content pack data: usernames, templates and value pools.
//!
//! Fallacy templates resolve against [`GENERIC_POOLS`]. Campaign templates
//! resolve against [`CAMPAIGN_POOLS`] first and fall back to the generic pools.

use feed_rules::{CampaignKind, FallacyKind};

pub(crate) const USERNAMES: &[&str] = &[
    "TruthSeeker42",
    "FactChecker",
    "FreeThinker",
    "ReasonableDebater",
    "LogicalMind",
    "OpinionHaver",
    "NewsJunkie",
    "MediaCritic",
    "RealistView",
    "IndependentVoice",
    "CriticalThinker",
    "ThoughtLeader",
    "DebateChampion",
    "PoliticalPundit",
    "SocialCommentator",
    "FreedomFighter",
    "TruthTeller",
    "UnbiasedObserver",
    "RationalAnalyst",
    "SkepticalCitizen",
];

pub(crate) fn campaign_usernames(kind: CampaignKind) -> &'static [&'static str] {
    match kind {
        CampaignKind::StateSponsored => &[
            "LocalNewsToday",
            "CitizenJournalist",
            "IndependentResearcher",
            "CommunityVoice",
            "FreedomWatcher",
            "TruthInvestigator",
            "UncensoredNews",
            "RealAmericans",
            "AuthenticVoices",
            "GrassrootsMovement",
            "LocalActivist",
            "ConcernedParent",
        ],
        CampaignKind::CorporateAstroturf => &[
            "EnergyWorkerUnion",
            "JobsFirst2024",
            "EconomicGrowthNow",
            "InnovationAlliance",
            "TaxpayerAdvocate",
            "SmallBusinessOwner",
            "WorkingFamilies",
            "EnergyIndependence",
            "ConsumerChoice",
            "TechProgress",
            "AmericaWorks",
            "FutureJobs",
        ],
        CampaignKind::DomesticPolitical => &[
            "PatriotAlert",
            "DefendDemocracy",
            "ProtectRights",
            "SecureElections",
            "YouthVoices",
            "SeniorCitizens",
            "MiddleClassFamily",
            "VeteranAdvocate",
            "CommunityLeader",
            "StateResident",
            "LocalBusiness",
            "TownCouncil",
        ],
    }
}

pub(crate) fn fallacy_templates(kind: FallacyKind) -> &'static [&'static str] {
    match kind {
        FallacyKind::Strawman => &[
            "People who support {position} basically want {exaggerated_consequence}. How ridiculous is that?",
            "The other side is arguing that {exaggerated_position}. They couldn't be more wrong!",
            "So you're saying {misrepresented_position}? That's completely unreasonable.",
            "Let me get this straight - {group} thinks {exaggerated_belief}. Unbelievable!",
            "Supporters of {position} just want {exaggerated_consequence}. It's so obvious.",
            "Environmental activists want to shut down all industry and send us back to the stone age.",
            "Anyone who supports gun regulation clearly wants to take away all of our constitutional rights.",
            "Public health officials are saying we should never leave our houses again and live in fear forever.",
        ],
        FallacyKind::FalseDilemma => &[
            "It's simple: either we {option_one} or we {bad_consequence}. There's no middle ground.",
            "We have two choices: {option_one} or {option_two}. There is no third option.",
            "The choice is clear: {option_one} or {option_two}. What's it going to be?",
            "You're either with {group_one} or with {group_two}. You can't support both.",
            "Either you support {position_one} or you support {position_two}. It's that simple.",
            "Either we drill for more oil or we all freeze in the dark. There are no alternatives.",
            "You either support law enforcement 100% or you support chaos and anarchy. Pick a side.",
        ],
        FallacyKind::AdHominem => &[
            "Don't listen to {person}'s arguments about {topic}. They {personal_attack}.",
            "Why would anyone trust {person} on {topic}? Everyone knows they {personal_attack}.",
            "The problem with {person}'s position on {topic} is that they {personal_attack}.",
            "{person} has no credibility on {topic} because they {personal_attack}.",
            "I can't believe people listen to {person} about {topic} when they clearly {personal_attack}.",
            "That economist's analysis is worthless because they went to a state school, not an Ivy League university.",
            "Why should we listen to climate scientists when most of them are just liberal activists in disguise?",
        ],
        FallacyKind::AppealEmotion => &[
            "If you have any heart at all, you'll support {position}. Think about {emotional_subject}!",
            "How can anyone oppose {position}? Don't you care about {emotional_subject}?",
            "Only someone completely heartless would support {position} when {emotional_consequence}.",
            "I'm literally shaking thinking about what happens if we don't {action}. {emotional_appeal}",
            "My heart breaks every time I think about {emotional_subject}. We must {action} now!",
            "If this policy fails, countless innocent families will suffer. How can you live with yourself if you don't support it?",
            "Every day we delay action, more children are at risk. Won't someone please think of the children?",
        ],
        FallacyKind::HastyGeneralization => &[
            "I saw two people from {group} who {action}. They're all like that!",
            "My friend once experienced {specific_event}, so clearly {general_conclusion}.",
            "The one time I tried {activity}, {negative_outcome} happened. It's always a disaster.",
            "I met someone from {group} and they {trait}. That tells you everything you need to know.",
            "I went to {place} once and {experience}. The whole place is like that.",
            "I know three people who got sick after their vaccination. Clearly vaccines are dangerous for everyone.",
            "My neighbor got robbed in that part of town, so obviously the entire area is completely unsafe.",
            "Our company surveyed 5 customers and 4 were satisfied. That's an 80% approval rating across all users!",
            "I tested this on my family of 4 and it worked for 3 of us. That's 75% effectiveness for the entire population!",
        ],
        FallacyKind::AppealAuthority => &[
            "As {celebrity} said, {dubious_claim}. Who would argue with someone so successful?",
            "{authority_figure} believes {claim}, so it must be true.",
            "According to {authority_figure}, {claim}. That's all the evidence I need.",
            "Don't argue with me, argue with {authority_figure} who clearly stated {claim}.",
            "{authority_figure} supports {position}, which proves it's the right approach.",
            "My favorite actor posted about this health supplement, so it must work. They wouldn't lie to their fans.",
            "This retired general says the strategy is sound, and military people know best about everything.",
            "This influencer with 2 million followers shared an infographic about {topic}. That's basically peer review!",
            "A professor (of literature) posted this chart about climate data. Academic credentials prove everything!",
        ],
        FallacyKind::StatsManipulation => &[
            "Studies show a {percentage}% increase in {metric} after {action}. The evidence is clear!",
            "The data doesn't lie: {percentage}% of {group} agree that {claim}.",
            "We saw {change} in just {short_time_period}, proving that {dubious_conclusion}.",
            "The numbers speak for themselves: {cherry_picked_stat} means {conclusion}.",
            "Research shows {correlation}, which proves {causation_claim}.",
            "Crime went up 50% in that neighborhood! (But they don't mention it went from 2 incidents to 3.)",
            "Our product works 3x better than the leading competitor! (Compared to their worst-performing version from 10 years ago.)",
            "New study shows 87% effectiveness! (Based on a survey of only 23 people who completed the full program.)",
            "Check out this graph showing how {metric} skyrocketed after {event}! The Y-axis starts at 98% to really show the dramatic change.",
            "The data is conclusive: cities with more {factor_a} have {percentage}% higher {outcome}. Clearly {factor_a} causes {outcome}.",
            "According to our internal research, 9 out of 10 customers prefer our product! (We surveyed our employees' families.)",
            "This chart proves renewable energy is failing - wind power dropped 15% last winter! (Ignoring that winter always has less wind.)",
            "Hospital admissions increased 200% during the full moon! (From 1 case to 3 cases that month.)",
            "Our new policy reduced complaints by 90%! (We stopped accepting complaint forms.)",
            "Look at this alarming trend: {incident_type} increased {large_percentage}% in just {timeframe}! (Cherry-picked data from worst-case scenario.)",
        ],
        FallacyKind::ConfirmationBias => &[
            "I've read five articles supporting {my_position}. The opposing evidence must be flawed.",
            "Every trusted source I follow confirms that {my_belief}. The others are just biased.",
            "I've seen so much evidence for {my_position} that opposing arguments aren't worth considering.",
            "All the experts I respect agree that {my_belief}. Anyone who disagrees is not credible.",
            "The more I research, the more confirmation I find that {my_belief} is correct.",
            "I only get my news from sources that tell the truth, unlike the mainstream media that lies about everything.",
            "I found 12 studies that support my view and ignored the 47 that contradict it. The science is settled!",
            "This graph perfectly supports my argument! (Ignoring the 15 other graphs that show the opposite trend.)",
        ],
        FallacyKind::FalseCausality => &[
            "{event_a} happened, then {event_b} occurred. Clearly, one caused the other.",
            "Since we implemented {policy}, we've seen {change}. The policy is obviously responsible.",
            "I started {action} and then {unrelated_outcome} happened. It can't be a coincidence!",
            "The rate of {metric_a} and {metric_b} increased at the same time. They must be related.",
            "Ever since {event}, we've seen more {outcome}. The connection is obvious!",
            "Violent crime increased after that video game was released. Video games clearly cause violence.",
            "I started eating organic food and my headaches went away. Organic food definitely cures headaches.",
            "Ice cream sales and drowning deaths both peak in summer. Ice cream must cause drowning!",
            "Countries with more McDonald's have higher GDP. Fast food clearly drives economic growth!",
            "This scatter plot shows a clear correlation between {variable_a} and {variable_b} - proof of causation!",
            "Every time the stock market goes up, my lucky socks are clean. Clearly my laundry schedule affects the economy.",
        ],
        FallacyKind::InauthenticBehavior => &[
            "I'm just an average citizen with no agenda, but {talking_point} #JustSaying",
            "As a former supporter of {opposing_group}, I've seen the light about {talking_point}.",
            "I have no stake in this debate, but {suspicious_consensus_view} is clearly correct.",
            "I used to believe {opposing_view} until I learned that {talking_point}. Everyone should know this!",
            "Longtime {identity} here. We all need to accept that {unexpected_position}.",
        ],
        FallacyKind::Whataboutism => &[
            "Why focus on {current_issue} when {other_side} is doing {other_issue}?",
            "Everyone's criticizing {group} for {criticized_action}, but what about when {other_group} did {similar_action}?",
            "Sure, {problem} is concerning, but why isn't anyone talking about {unrelated_problem}?",
            "Before we address {issue}, shouldn't we talk about how {other_side} has done {other_thing}?",
            "The media covers {topic} extensively, but stays silent about {unrelated_topic}. Hypocrites!",
            "Why are we talking about this politician's mistakes when the other party did worse things last year?",
        ],
        FallacyKind::MovingGoalposts => &[
            "Yes, you provided evidence for {claim}, but that's not enough. Now I need {higher_standard}.",
            "I know I said {original_requirement}, but now I realize we also need {new_requirement}.",
            "That evidence only addresses part of the issue. You still haven't proven {shifted_focus}.",
            "That may be true, but it doesn't address the real question of {tangential_issue}.",
            "OK, but that's just one study. I need to see research from {specific_sources} before I'm convinced.",
        ],
        FallacyKind::None => &[
            "I think {topic} deserves more thoughtful discussion. There are valid points on multiple sides.",
            "Has anyone read any good articles about {topic} recently? I'm trying to learn more.",
            "It's important to consider various perspectives on {topic} before forming a strong opinion.",
            "I've been researching {topic} lately and found some interesting information worth sharing.",
            "What are some reliable sources to learn more about {topic}? I want to be well-informed.",
            "The latest research on renewable energy shows promising developments in battery technology.",
            "Local schools are implementing new literacy programs with encouraging early results.",
            "Community volunteers cleaned up the park this weekend. Great to see neighbors working together!",
            "Interesting documentary about urban planning on tonight. Always fascinating to learn how cities develop.",
            "New bike lanes downtown seem to be reducing traffic congestion according to city data.",
            "Public library is offering free computer classes for seniors. What a great community resource.",
            "Local farmers market has amazing produce this season. Supporting local agriculture feels good.",
            "New peer-reviewed study with 10,000 participants shows promising results for {treatment}. Sample size and methodology look solid.",
            "City released comprehensive traffic data covering 5 years. Interesting to see seasonal patterns and long-term trends.",
            "University researchers published their methodology and raw data alongside their findings. Love the transparency!",
            "Meta-analysis of 15 studies suggests {study_conclusion}. Good to see researchers synthesizing multiple data sources.",
            "Local health department released clear statistics with confidence intervals and explained limitations. Refreshing honesty!",
            "This economist explained both the strengths AND weaknesses of their economic model. Rare intellectual honesty!",
        ],
    }
}

pub(crate) fn campaign_templates(kind: CampaignKind) -> &'static [&'static str] {
    match kind {
        CampaignKind::StateSponsored => &[
            "Just learned that {institution} has been {negative_action} for years. Why isn't mainstream media covering this? #WakeUp",
            "Both sides are equally corrupt. There's no point in {civic_action} anymore. The system is rigged against ordinary people.",
            "Research shows {controversial_claim}, but {institution} doesn't want you to know. Follow the money! 💰",
            "Why do we trust {expert_group} when they've been wrong about {unrelated_topic} before? Question everything.",
            "The real issue isn't {current_topic}, it's how {institution} is dividing us. We're fighting each other instead of the real problem.",
            "Interesting how {institution} announces {policy} right when {distraction_event} happens. Coincidence? I think not.",
            "My {family_member} works in {relevant_field} and says everyone there knows {unsupported_claim} but can't speak out.",
            "Remember when {institution} said {past_statement}? Now they're saying {contradictory_statement}. Who can we trust?",
        ],
        CampaignKind::CorporateAstroturf => &[
            "As a {job_title} with {number} years experience, new regulations will devastate our industry. {number} families depend on these jobs!",
            "Local business owner here. These proposed changes would force me to {negative_consequence}. Think about the economic impact on our community!",
            "Working parent of {number} kids. Can't afford higher {costs} from these environmental regulations. Families first! #RealTalk",
            "Union member speaking: We support responsible {industry} that keeps Americans working. These extreme policies threaten {number} jobs in our state.",
            "Small town resident. Our community depends on {industry}. Urban politicians don't understand our reality. We need balance, not ideology.",
            "Taxpayer here. Why are we paying for {policy} when we have real problems like {local_issue}? Priorities, people!",
            "Consumer advocacy: New regulations mean higher prices for everyday families. Who benefits? Follow the money to find out.",
            "Tech worker here. Over-regulation stifles innovation. America leads in {technology} because we embrace progress, not restrict it.",
        ],
        CampaignKind::DomesticPolitical => &[
            "URGENT: {political_group} are trying to {extreme_action} before the election. We have {short_timeframe} to stop this!",
            "Real {identity_group} understand that {political_position}. If you care about {emotional_value}, you know what to do.",
            "They're coming for your {cherished_thing} next. First {previous_target}, now {current_target}. When will we say enough?",
            "Every day we wait, {negative_outcome} gets worse. Our {family_type} deserve better. Time to {political_action}!",
            "I never thought I'd see the day when {extreme_scenario} in America. This isn't the country I grew up in.",
            "Attention {local_area} residents: Your {local_representative} voted AGAINST {popular_position}. Remember this in {timeframe}!",
            "Breaking: {source} reports {inflammatory_claim}. Mainstream media silence speaks volumes. Share before it gets buried!",
            "As a proud {identity}, I'm tired of being told I should {uncomfortable_position}. We need leaders who understand our values.",
        ],
    }
}

pub(crate) const GENERIC_POOLS: &[(&str, &[&str])] = &[
    (
        "position",
        &[
            "healthcare reform",
            "environmental regulations",
            "tax policy",
            "immigration reform",
            "gun control",
            "educational reform",
        ],
    ),
    (
        "exaggerated_consequence",
        &[
            "to destroy the economy",
            "to eliminate all personal freedom",
            "to bankrupt the country",
            "to control every aspect of our lives",
            "to undermine our values",
        ],
    ),
    (
        "exaggerated_position",
        &[
            "we should have no regulations whatsoever",
            "we should abandon all traditional values",
            "the government should control everything",
            "we should open all borders completely",
            "we should never change anything",
        ],
    ),
    (
        "misrepresented_position",
        &[
            "we should give up all our rights",
            "nobody should be held responsible for anything",
            "the government should decide everything for us",
            "we should ignore all evidence",
            "we should completely restructure society",
        ],
    ),
    (
        "group",
        &[
            "liberals",
            "conservatives",
            "politicians",
            "experts",
            "journalists",
            "academics",
            "celebrities",
        ],
    ),
    (
        "exaggerated_belief",
        &[
            "the world is ending tomorrow",
            "there are simple solutions to complex problems",
            "their side is always right",
            "facts do not matter",
            "everyone else is wrong",
        ],
    ),
    (
        "option_one",
        &[
            "follow this policy exactly",
            "agree with this viewpoint",
            "support this candidate",
            "accept this solution",
            "adopt this approach",
        ],
    ),
    (
        "option_two",
        &[
            "face complete disaster",
            "lose all our freedoms",
            "accept a terrible alternative",
            "give up everything we value",
            "admit we do not care about the issue",
        ],
    ),
    (
        "bad_consequence",
        &[
            "everything will fall apart",
            "we will face dire consequences",
            "we will regret it forever",
            "it will be a disaster",
            "we will never recover",
        ],
    ),
    (
        "group_one",
        &[
            "the good people",
            "those who care",
            "the reasonable side",
            "those who understand",
            "the sensible majority",
        ],
    ),
    (
        "group_two",
        &[
            "the opposition",
            "those who do not get it",
            "the unreasonable side",
            "those who deny reality",
            "the extremists",
        ],
    ),
    (
        "position_one",
        &[
            "the only sensible approach",
            "what any rational person would want",
            "the obviously correct policy",
            "what we all know is right",
            "the only position that makes sense",
        ],
    ),
    (
        "position_two",
        &[
            "a completely unreasonable alternative",
            "what only extremists want",
            "a clearly flawed approach",
            "something no sensible person would support",
            "an obviously harmful position",
        ],
    ),
    (
        "person",
        &[
            "that politician",
            "that celebrity",
            "that commentator",
            "that expert",
            "that public figure",
            "that CEO",
            "that activist",
        ],
    ),
    (
        "topic",
        &[
            "the economy",
            "healthcare",
            "education",
            "climate change",
            "foreign policy",
            "social issues",
            "technology regulation",
            "energy policy",
        ],
    ),
    (
        "personal_attack",
        &[
            "never even had a real job",
            "lied about their credentials",
            "has a conflict of interest",
            "has a sketchy past",
            "is not even qualified to speak on this",
            "does not practice what they preach",
            "has changed their position multiple times",
        ],
    ),
    (
        "emotional_subject",
        &[
            "the children",
            "future generations",
            "vulnerable communities",
            "the elderly",
            "struggling families",
            "innocent victims",
        ],
    ),
    (
        "emotional_consequence",
        &[
            "people will suffer",
            "we will destroy what we value most",
            "we will abandon our principles",
            "we will regret it deeply",
            "the damage will be irreversible",
        ],
    ),
    (
        "emotional_appeal",
        &[
            "It breaks my heart to think about it.",
            "I cannot sleep thinking about what might happen.",
            "How will we look our children in the eyes?",
            "The thought brings me to tears.",
            "It is absolutely terrifying to consider.",
        ],
    ),
    (
        "action",
        &[
            "take action",
            "support this cause",
            "change our policies",
            "speak out",
            "make different choices",
        ],
    ),
    (
        "specific_event",
        &[
            "a bad customer service experience",
            "a negative interaction",
            "one problematic incident",
            "a single encounter",
            "a minor problem",
        ],
    ),
    (
        "general_conclusion",
        &[
            "the entire company is terrible",
            "the whole system is broken",
            "everyone in that group is the same",
            "it happens all the time",
            "it is a universal problem",
        ],
    ),
    (
        "activity",
        &[
            "that restaurant",
            "that service",
            "that product",
            "that location",
            "that experience",
        ],
    ),
    (
        "negative_outcome",
        &[
            "it was a disaster",
            "it went terribly wrong",
            "I had a bad experience",
            "I was disappointed",
            "it failed to meet expectations",
        ],
    ),
    (
        "trait",
        &[
            "was rude",
            "was dishonest",
            "was incompetent",
            "was biased",
            "did not know what they were talking about",
        ],
    ),
    (
        "place",
        &[
            "that city",
            "that country",
            "that neighborhood",
            "that venue",
            "that destination",
        ],
    ),
    (
        "experience",
        &[
            "had a terrible experience",
            "was treated poorly",
            "found it disappointing",
            "did not enjoy it",
            "encountered problems",
        ],
    ),
    (
        "celebrity",
        &[
            "that famous actor",
            "that popular musician",
            "that well-known athlete",
            "that social media influencer",
            "that TV personality",
        ],
    ),
    (
        "authority_figure",
        &[
            "a doctor on television",
            "a self-proclaimed expert",
            "a famous CEO",
            "a popular book author",
            "someone with a large social media following",
            "a celebrity with no relevant expertise",
        ],
    ),
    (
        "dubious_claim",
        &[
            "alternative medicine is better than conventional treatments",
            "traditional education is obsolete",
            "you can get rich quick with this method",
            "this product will change your life",
            "this simple trick solves complex problems",
        ],
    ),
    (
        "claim",
        &[
            "this product offers amazing benefits",
            "this approach is revolutionary",
            "this method guarantees results",
            "this solution is the only one that works",
            "this explanation is the correct one",
        ],
    ),
    (
        "percentage",
        &[
            "67",
            "85",
            "92",
            "73",
            "58",
            "94",
        ],
    ),
    (
        "metric",
        &[
            "satisfaction",
            "performance",
            "efficiency",
            "success",
            "improvement",
            "results",
        ],
    ),
    (
        "change",
        &[
            "a dramatic improvement",
            "a significant decline",
            "a major shift",
            "a remarkable transformation",
            "an unprecedented change",
        ],
    ),
    (
        "short_time_period",
        &[
            "just one week",
            "only a month",
            "a single quarter",
            "a brief trial period",
            "a limited test run",
        ],
    ),
    (
        "dubious_conclusion",
        &[
            "our approach is superior",
            "the alternative is ineffective",
            "we have solved the problem",
            "the debate is settled",
            "no further research is needed",
        ],
    ),
    (
        "cherry_picked_stat",
        &[
            "this one data point",
            "this isolated statistic",
            "this single measurement",
            "this particular figure",
            "this one-time result",
        ],
    ),
    (
        "conclusion",
        &[
            "the entire theory is proven",
            "the debate is settled",
            "our position is validated",
            "the opposition is wrong",
            "there is no need for further discussion",
        ],
    ),
    (
        "correlation",
        &[
            "these two trends moved together",
            "these factors appeared at the same time",
            "these metrics both increased",
            "these patterns emerged together",
            "these changes occurred simultaneously",
        ],
    ),
    (
        "causation_claim",
        &[
            "one definitely caused the other",
            "we know what is responsible",
            "the relationship is clearly causal",
            "we have identified the cause",
            "the driver of this change is obvious",
        ],
    ),
    (
        "my_position",
        &[
            "view on this topic",
            "stance on this issue",
            "perspective on this matter",
            "position in this debate",
            "opinion on this subject",
        ],
    ),
    (
        "my_belief",
        &[
            "vaccines are dangerous",
            "climate change is not real",
            "mainstream media is always wrong",
            "alternative medicine is superior",
            "conventional wisdom is incorrect",
            "the official narrative is false",
        ],
    ),
    (
        "event_a",
        &[
            "the new policy was implemented",
            "the new mayor was elected",
            "the company changed its logo",
            "daylight saving time started",
            "the new highway opened",
        ],
    ),
    (
        "event_b",
        &[
            "crime rates decreased",
            "sales improved",
            "test scores went up",
            "the economy grew",
            "public approval increased",
        ],
    ),
    (
        "policy",
        &[
            "the new regulation",
            "our marketing campaign",
            "the recent initiative",
            "the updated procedure",
            "the new system",
        ],
    ),
    (
        "unrelated_outcome",
        &[
            "I got a promotion",
            "the weather improved",
            "my team started winning",
            "my plants grew better",
            "I felt healthier",
        ],
    ),
    (
        "metric_a",
        &[
            "smartphone usage",
            "cheese consumption",
            "internet speeds",
            "coffee sales",
            "movie attendance",
        ],
    ),
    (
        "metric_b",
        &[
            "life expectancy",
            "test scores",
            "home prices",
            "divorce rates",
            "national debt",
        ],
    ),
    (
        "event",
        &[
            "the new law passed",
            "that product was released",
            "social media became popular",
            "that show premiered",
            "prices increased",
        ],
    ),
    (
        "outcome",
        &[
            "these types of incidents",
            "these kinds of behaviors",
            "these problems",
            "these trends",
            "these patterns",
        ],
    ),
    (
        "talking_point",
        &[
            "we must prioritize economic growth over environmental concerns",
            "both sides are equally extreme",
            "the mainstream narrative is completely wrong",
            "traditional experts have failed us",
            "we need radical change immediately",
        ],
    ),
    (
        "opposing_group",
        &[
            "environmentalists",
            "progressives",
            "conservatives",
            "traditional experts",
            "mainstream voices",
            "the opposing political party",
        ],
    ),
    (
        "suspicious_consensus_view",
        &[
            "we should trust corporations to self-regulate",
            "this controversial figure is actually right",
            "the scientific consensus is wrong",
            "the radical solution is the only option",
            "the extreme position is actually moderate",
        ],
    ),
    (
        "opposing_view",
        &[
            "what the experts say",
            "the scientific consensus",
            "conventional wisdom",
            "what most sources report",
            "the mainstream position",
        ],
    ),
    (
        "identity",
        &[
            "supporter of this cause",
            "member of this group",
            "advocate for this issue",
            "participant in this community",
            "follower of this approach",
        ],
    ),
    (
        "unexpected_position",
        &[
            "our group is wrong about everything",
            "we should actually oppose our traditional values",
            "our longtime goals are misguided",
            "we should abandon our core principles",
            "everything we have fought for is wrong",
        ],
    ),
    (
        "current_issue",
        &[
            "this scandal",
            "this controversy",
            "this problem",
            "this mistake",
            "this policy failure",
        ],
    ),
    (
        "other_side",
        &[
            "the other political party",
            "the opposition",
            "your preferred group",
            "your allies",
            "the other side",
        ],
    ),
    (
        "other_issue",
        &[
            "something worse",
            "the same thing",
            "something more serious",
            "much more problematic things",
            "far worse things",
        ],
    ),
    (
        "criticized_action",
        &[
            "this mistake",
            "this controversial action",
            "this problematic statement",
            "this questionable decision",
            "this policy",
        ],
    ),
    (
        "other_group",
        &[
            "the previous administration",
            "your favored group",
            "the other party",
            "your allies",
            "people you support",
        ],
    ),
    (
        "similar_action",
        &[
            "the exact same thing",
            "something much worse",
            "comparable things",
            "essentially the same action",
            "virtually identical behavior",
        ],
    ),
    (
        "problem",
        &[
            "this issue",
            "this concern",
            "this controversy",
            "this policy problem",
            "this situation",
        ],
    ),
    (
        "unrelated_problem",
        &[
            "something completely different",
            "an unrelated issue",
            "a distraction",
            "a topic you would rather discuss",
            "something that deflects attention",
        ],
    ),
    (
        "issue",
        &[
            "this controversy",
            "this problem",
            "this mistake",
            "this scandal",
            "this concern",
        ],
    ),
    (
        "other_thing",
        &[
            "worse things",
            "the same thing",
            "similar actions",
            "comparable behavior",
            "equivalent mistakes",
        ],
    ),
    (
        "unrelated_topic",
        &[
            "something that does not fit their narrative",
            "a story they choose to ignore",
            "an issue that contradicts their perspective",
            "a topic that does not get clicks",
            "a subject that does not serve their agenda",
        ],
    ),
    (
        "original_requirement",
        &[
            "one credible source",
            "some basic evidence",
            "a reasonable explanation",
            "a logical argument",
            "an expert opinion",
        ],
    ),
    (
        "higher_standard",
        &[
            "multiple peer-reviewed studies",
            "unanimous expert consensus",
            "irrefutable evidence",
            "proof beyond any doubt",
            "comprehensive data from multiple sources",
        ],
    ),
    (
        "new_requirement",
        &[
            "additional constraints",
            "further evidence",
            "more extensive proof",
            "additional conditions",
            "extra verification",
        ],
    ),
    (
        "shifted_focus",
        &[
            "this tangential aspect",
            "this minor detail",
            "this secondary concern",
            "this additional factor",
            "this related but separate issue",
        ],
    ),
    (
        "tangential_issue",
        &[
            "something only loosely related",
            "a minor technical detail",
            "an aspect not central to the main argument",
            "a side point",
            "a distraction from the main topic",
        ],
    ),
    (
        "specific_sources",
        &[
            "these specific authorities",
            "these particular journals",
            "these select experts",
            "these exact types of studies",
            "these precise methodologies",
        ],
    ),
    (
        "factor_a",
        &[
            "coffee shops",
            "bike lanes",
            "trees",
            "public transit",
            "electric vehicles",
            "bookstores",
            "yoga studios",
        ],
    ),
    (
        "large_percentage",
        &[
            "45",
            "67",
            "89",
            "112",
            "156",
            "203",
            "287",
        ],
    ),
    (
        "timeframe",
        &[
            "one week",
            "two months",
            "six months",
            "one year",
            "five years",
            "the last quarter",
            "this decade",
        ],
    ),
    (
        "incident_type",
        &[
            "accidents",
            "complaints",
            "delays",
            "errors",
            "problems",
            "incidents",
            "failures",
        ],
    ),
    (
        "variable_a",
        &[
            "shoe size",
            "city population",
            "temperature",
            "rainfall",
            "internet speed",
            "coffee consumption",
        ],
    ),
    (
        "variable_b",
        &[
            "happiness levels",
            "crime rates",
            "test scores",
            "productivity",
            "life satisfaction",
            "economic growth",
        ],
    ),
    (
        "treatment",
        &[
            "meditation",
            "exercise",
            "dietary supplements",
            "sleep therapy",
            "stress reduction",
            "vitamin D",
        ],
    ),
    (
        "study_conclusion",
        &[
            "moderate benefits",
            "promising early results",
            "mixed outcomes",
            "potential for further research",
            "inconclusive but interesting findings",
        ],
    ),
];

pub(crate) const CAMPAIGN_POOLS: &[(&str, &[&str])] = &[
    (
        "institution",
        &[
            "CDC",
            "FBI",
            "Department of Education",
            "EPA",
            "Federal Reserve",
            "Supreme Court",
            "Congress",
        ],
    ),
    (
        "negative_action",
        &[
            "hiding information",
            "misleading the public",
            "serving special interests",
            "covering up failures",
        ],
    ),
    (
        "controversial_claim",
        &[
            "vaccines have unreported side effects",
            "climate data is manipulated",
            "election systems are vulnerable",
        ],
    ),
    (
        "expert_group",
        &[
            "scientists",
            "economists",
            "doctors",
            "educators",
            "journalists",
        ],
    ),
    (
        "unrelated_topic",
        &[
            "the economy",
            "foreign policy",
            "technology predictions",
            "dietary guidelines",
        ],
    ),
    (
        "current_topic",
        &[
            "healthcare",
            "education",
            "climate change",
            "immigration",
            "the economy",
        ],
    ),
    (
        "distraction_event",
        &[
            "a major news story",
            "a celebrity scandal",
            "international tensions",
            "a natural disaster",
        ],
    ),
    (
        "family_member",
        &[
            "cousin",
            "brother-in-law",
            "neighbor",
            "friend",
        ],
    ),
    (
        "relevant_field",
        &[
            "government",
            "healthcare",
            "education",
            "media",
        ],
    ),
    (
        "unsupported_claim",
        &[
            "there are major cover-ups",
            "the real data is different",
            "insiders are concerned",
        ],
    ),
    (
        "job_title",
        &[
            "construction worker",
            "factory supervisor",
            "truck driver",
            "small business owner",
            "farmer",
        ],
    ),
    (
        "number",
        &[
            "15",
            "25",
            "2",
            "3",
            "1000",
            "500",
        ],
    ),
    (
        "negative_consequence",
        &[
            "lay off workers",
            "close my doors",
            "move operations overseas",
            "cut benefits",
        ],
    ),
    (
        "costs",
        &[
            "energy bills",
            "gas prices",
            "food costs",
            "healthcare",
        ],
    ),
    (
        "industry",
        &[
            "energy",
            "manufacturing",
            "agriculture",
            "transportation",
        ],
    ),
    (
        "local_issue",
        &[
            "infrastructure",
            "schools",
            "crime",
            "homelessness",
        ],
    ),
    (
        "technology",
        &[
            "AI",
            "biotech",
            "clean energy",
            "manufacturing",
        ],
    ),
    (
        "political_group",
        &[
            "extremists",
            "radical activists",
            "special interests",
            "lobbyists",
        ],
    ),
    (
        "extreme_action",
        &[
            "change voting laws",
            "restrict freedoms",
            "raise taxes",
            "eliminate protections",
        ],
    ),
    (
        "short_timeframe",
        &[
            "30 days",
            "weeks",
            "until the election",
            "this month",
        ],
    ),
    (
        "identity_group",
        &[
            "Americans",
            "parents",
            "workers",
            "patriots",
            "families",
        ],
    ),
    (
        "political_position",
        &[
            "freedom comes first",
            "families matter most",
            "security is essential",
            "jobs are the priority",
        ],
    ),
    (
        "emotional_value",
        &[
            "your children",
            "our future",
            "our values",
            "our community",
        ],
    ),
    (
        "cherished_thing",
        &[
            "freedom of speech",
            "privacy",
            "traditional values",
            "economic opportunity",
        ],
    ),
    (
        "previous_target",
        &[
            "small businesses",
            "rural communities",
            "working families",
            "local schools",
        ],
    ),
    (
        "current_target",
        &[
            "your neighborhood",
            "your job",
            "your family",
            "your rights",
        ],
    ),
    (
        "negative_outcome",
        &[
            "division in our community",
            "threats to our way of life",
            "economic uncertainty",
        ],
    ),
    (
        "family_type",
        &[
            "children",
            "families",
            "seniors",
            "veterans",
        ],
    ),
    (
        "political_action",
        &[
            "vote",
            "speak out",
            "get involved",
            "demand answers",
        ],
    ),
    (
        "extreme_scenario",
        &[
            "such division",
            "such government overreach",
            "such attacks on freedom",
        ],
    ),
    (
        "local_area",
        &[
            "Virginia",
            "Ohio",
            "Texas",
            "Michigan",
            "Pennsylvania",
        ],
    ),
    (
        "local_representative",
        &[
            "Senator",
            "Congressman",
            "Governor",
            "Mayor",
        ],
    ),
    (
        "popular_position",
        &[
            "infrastructure funding",
            "tax relief",
            "education support",
            "healthcare access",
        ],
    ),
    (
        "timeframe",
        &[
            "November",
            "next election",
            "2024",
            "the primaries",
        ],
    ),
    (
        "source",
        &[
            "leaked documents",
            "insider sources",
            "whistleblowers",
            "investigative reports",
        ],
    ),
    (
        "inflammatory_claim",
        &[
            "secret meetings occurred",
            "funding was diverted",
            "policies are being hidden",
        ],
    ),
    (
        "identity",
        &[
            "American",
            "parent",
            "taxpayer",
            "citizen",
            "veteran",
        ],
    ),
    (
        "uncomfortable_position",
        &[
            "apologize for our values",
            "accept policies that hurt families",
            "stay silent about problems",
        ],
    ),
    (
        "civic_action",
        &[
            "voting",
            "protesting",
            "contacting your representatives",
            "following the news",
        ],
    ),
    (
        "past_statement",
        &[
            "the program was completely safe",
            "inflation was temporary",
            "the data was final",
            "there was nothing to worry about",
        ],
    ),
    (
        "contradictory_statement",
        &[
            "the exact opposite",
            "they were never sure",
            "new guidance is coming",
            "it was never guaranteed",
        ],
    ),
];
