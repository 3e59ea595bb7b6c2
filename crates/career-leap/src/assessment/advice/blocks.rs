use super::super::domain::{AgeBracket, FamilySituation, IncomeLevel, LivingCostTargets};
use super::{format_yen, AdviceSection, Encouragement, SectionKind};

const FUNDING_GOAL_TITLE: &str = "資金目標の目安";
const AGE_TITLE: &str = "年代別のアドバイス";
const INCOME_TITLE: &str = "月収に応じたアドバイス";
const CHILDREN_TITLE: &str = "子育て世帯向けアドバイス";
const FAMILY_TITLE: &str = "家族構成に合わせたアドバイス";
const SINGLE_TITLE: &str = "単身者向けアドバイス";
const LOW_SAVINGS_TITLE: &str = "貯蓄が少なくても始められる準備";
const CAREER_TITLE: &str = "サラリーマンを続けるリスクとの比較";
const SPECIAL_TITLE: &str = "あなたへの特別メッセージ";
const ACTION_TITLE: &str = "具体的な行動ステップ";

/// Share of monthly income assumed to be set aside each month, as 1/N.
const SAVINGS_RATE_DIVISOR: u64 = 5;

pub(super) fn funding_goal(
    targets: &LivingCostTargets,
    savings: u64,
    monthly_income: u64,
) -> AdviceSection {
    let mut body = format!(
        "生活費3ヶ月分の目標額: {}\n生活費6ヶ月分の目標額: {}\n",
        format_yen(targets.three_months),
        format_yen(targets.six_months),
    );

    if savings >= targets.three_months {
        body.push_str(
            "現在の貯蓄で3ヶ月分の目標はすでに達成しています。6ヶ月分を目指せば、さらに落ち着いて次の一歩を選べます。",
        );
    } else {
        let gap = targets.three_months - savings;
        let monthly_saving = monthly_saving(monthly_income);
        let months = months_to_close(gap, monthly_income);
        body.push_str(&format!(
            "3ヶ月分の目標まであと{}です。月収の20%（約{}）を毎月貯蓄すると、約{}ヶ月で達成できます。",
            format_yen(gap),
            format_yen(monthly_saving),
            months,
        ));
    }

    AdviceSection::new(SectionKind::FundingGoal, FUNDING_GOAL_TITLE, body)
}

/// Monthly savings at 20% of income, rounded half up without overflowing.
pub(super) fn monthly_saving(monthly_income: u64) -> u64 {
    let remainder = monthly_income % SAVINGS_RATE_DIVISOR;
    monthly_income / SAVINGS_RATE_DIVISOR + u64::from(remainder * 2 >= SAVINGS_RATE_DIVISOR)
}

/// Months needed to cover `gap` when saving 20% of income, rounded up.
pub(super) fn months_to_close(gap: u64, monthly_income: u64) -> u64 {
    let scaled_gap = u128::from(gap) * u128::from(SAVINGS_RATE_DIVISOR);
    let income = u128::from(monthly_income.max(1));
    let months = scaled_gap.div_ceil(income);
    u64::try_from(months).unwrap_or(u64::MAX)
}

pub(super) fn age_advice(bracket: AgeBracket) -> AdviceSection {
    let body = match bracket {
        AgeBracket::UnderThirty => {
            "20代は挑戦と失敗から最も多くを学べる時期です。やり直しが利くうちに小さく始め、経験を資産に変えていきましょう。"
        }
        AgeBracket::Thirties => {
            "30代はこれまでの実務経験と人脈がそのまま武器になります。専門性を軸に据えれば、独立後も安定した仕事につなげやすい年代です。"
        }
        AgeBracket::Forties => {
            "40代は培ってきた信頼とマネジメント経験が評価される年代です。前職の取引先や同僚とのつながりを最初の顧客基盤として活かしましょう。"
        }
        AgeBracket::Fifties => {
            "50代の深い業界知識は他の誰にも真似できない強みです。顧問や専門アドバイザーとしての働き方も視野に入れてみましょう。"
        }
        AgeBracket::SixtyPlus => {
            "60代以降は、長年の経験を次の世代に伝える働き方が歓迎されます。無理のないペースで、健康と収入のバランスを大切にしましょう。"
        }
    };

    AdviceSection::new(SectionKind::AgeAdvice, AGE_TITLE, body.to_string())
}

pub(super) fn income_advice(level: IncomeLevel) -> AdviceSection {
    let body = match level {
        IncomeLevel::Low => {
            "現在の月収では、退職前に副業で小さな収入源を作っておくことが特に重要です。固定費を見直し、生活費の下限を把握しておきましょう。"
        }
        IncomeLevel::Medium => {
            "安定した月収がある今のうちに、貯蓄と並行してスキルへの投資を進めましょう。独立後の最初の半年を支える収入計画を立てておくと安心です。"
        }
        IncomeLevel::High => {
            "高い月収は強力な準備資金になります。生活水準を上げすぎず、差額を事業資金と生活防衛資金に振り分けましょう。"
        }
    };

    AdviceSection::new(SectionKind::IncomeAdvice, INCOME_TITLE, body.to_string())
}

pub(super) fn family_advice(situation: FamilySituation) -> AdviceSection {
    match situation {
        FamilySituation::WithChildren { count } => {
            let children = if count > 0 {
                format!("お子さま{count}人")
            } else {
                "お子さま".to_string()
            };
            let body = format!(
                "{children}の教育費や生活費を考えると、収入が途切れない仕組みづくりが欠かせません。児童手当や自治体の子育て支援制度を確認し、家族と計画を共有しておきましょう。"
            );
            AdviceSection::new(SectionKind::FamilyAdvice, CHILDREN_TITLE, body)
        }
        FamilySituation::Family => AdviceSection::new(
            SectionKind::FamilyAdvice,
            FAMILY_TITLE,
            "ご家族と支え合える環境は大きな強みです。パートナーの収入や社会保険の扶養の扱いを確認し、家計全体で退職後の見通しを立てましょう。"
                .to_string(),
        ),
        FamilySituation::Single => AdviceSection::new(
            SectionKind::FamilyAdvice,
            SINGLE_TITLE,
            "単身の方は意思決定が早く、生活費も調整しやすいのが強みです。その身軽さを活かして、思い切った挑戦も検討できます。"
                .to_string(),
        ),
    }
}

pub(super) fn low_savings(level: IncomeLevel, has_children: bool) -> AdviceSection {
    let monthly_target = match level {
        IncomeLevel::Low => "月収の10〜15%",
        IncomeLevel::Medium => "月収の20%",
        IncomeLevel::High => "月収の30%以上",
    };

    let mut body = format!(
        "今の貯蓄が目標に届いていなくても、準備は今日から始められます。まずは{monthly_target}を毎月の貯蓄目標にして、失業保険や副業収入でつなぐ計画を立てましょう。"
    );
    if has_children {
        body.push_str("お子さまがいるご家庭では、教育費の積立を止めずに済むよう、退職時期を柔軟に調整することも選択肢です。");
    }

    AdviceSection::new(SectionKind::LowSavings, LOW_SAVINGS_TITLE, body)
}

pub(super) fn career_comparison(has_children: bool) -> AdviceSection {
    let mut body = String::from(
        "会社員を続けることにもリスクはあります。業績悪化による減給やリストラ、スキルの陳腐化は誰にでも起こり得ます。自分の力で稼ぐ経験は、どんな時代でも通用する安心につながります。",
    );
    if has_children {
        body.push_str("親が自分らしく働く姿は、お子さまにとっても大切な学びになります。");
    }

    AdviceSection::new(SectionKind::CareerComparison, CAREER_TITLE, body)
}

pub(super) fn special_message(encouragement: Encouragement) -> AdviceSection {
    let body = match encouragement {
        Encouragement::HighestRisk => {
            "今はまだ準備の段階ですが、状況を正しく把握できたことが最初の一歩です。焦らず、貯蓄と副業収入を少しずつ積み上げていけば、必ず道は開けます。"
        }
        Encouragement::HighRisk => {
            "ご家族を守りながらの挑戦には慎重さが必要ですが、計画的に準備を進めれば十分に実現できます。一つずつ不安を解消していきましょう。"
        }
        Encouragement::ParentsSteady => {
            "ご家族がいても、ここまでしっかり準備できているあなたなら大丈夫です。家族の応援を力に、自信を持って新しい道に進みましょう。"
        }
        Encouragement::Steady => {
            "あなたには新しい一歩を踏み出す準備が整いつつあります。これまでの経験を信じて、理想の働き方を形にしていきましょう。"
        }
    };

    AdviceSection::new(SectionKind::SpecialMessage, SPECIAL_TITLE, body.to_string())
}

pub(super) fn action_steps(
    level: IncomeLevel,
    has_children: bool,
    age: Option<AgeBracket>,
) -> AdviceSection {
    let mut steps: Vec<&str> = vec![
        "毎月の生活費を1ヶ月分記録し、本当に必要な金額を把握する",
        "退職後に必要な健康保険・年金の手続きを調べておく",
        "退職の意思を伝える時期と引き継ぎの計画を決める",
    ];

    steps.extend(match level {
        IncomeLevel::Low => [
            "固定費（通信費・保険・サブスク）を見直して毎月の支出を減らす",
            "副業で月1万円の収入を作ることを最初の目標にする",
            "失業保険の受給条件と金額を確認する",
        ],
        IncomeLevel::Medium => [
            "毎月の貯蓄額を自動積立に設定する",
            "独立後に使えるスキルの棚卸しをする",
            "副業で最初の顧客を1人獲得する",
        ],
        IncomeLevel::High => [
            "事業資金と生活防衛資金の口座を分ける",
            "税理士やファイナンシャルプランナーに相談する",
            "退職前にクレジットカードや住宅ローンの審査を済ませておく",
        ],
    });

    if has_children {
        steps.extend([
            "教育費の今後5年間の見通しを立てる",
            "自治体の子育て支援制度や医療費助成を確認する",
            "家族会議を開いて退職後の生活イメージを共有する",
        ]);
    }

    if let Some(bracket) = age {
        steps.extend(match bracket {
            AgeBracket::UnderThirty => [
                "学びたい分野の勉強会やコミュニティに参加する",
                "小さなプロジェクトで実績を作る",
                "同世代の独立経験者に話を聞く",
            ],
            AgeBracket::Thirties => [
                "自分の専門分野を一言で説明できるようにする",
                "社外の人脈づくりに月2回は時間を使う",
                "ポートフォリオや実績の一覧をまとめる",
            ],
            AgeBracket::Forties => [
                "前職の取引先や同僚に独立の構想を相談する",
                "マネジメント経験を活かせる仕事を洗い出す",
                "老後資金の計画を見直す",
            ],
            AgeBracket::Fifties => [
                "顧問・アドバイザー契約の可能性を探る",
                "退職金と年金の受取方法を確認する",
                "健康診断を受けて体調面の準備も整える",
            ],
            AgeBracket::SixtyPlus => [
                "年金と事業収入の組み合わせを試算する",
                "無理のない働き方の時間配分を決める",
                "経験を伝えられる講師や相談役の機会を探す",
            ],
        });
    }

    let body = steps
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {step}", index + 1))
        .collect::<Vec<_>>()
        .join("\n");

    AdviceSection::new(SectionKind::ActionSteps, ACTION_TITLE, body)
}
